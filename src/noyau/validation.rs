// src/noyau/validation.rs
//
// Validateur syntaxique (oracle accepte/refuse)
// ---------------------------------------------
// Contrat :
// - Fonction pure et totale : toute entrée donne true ou false, jamais d’erreur.
// - Aucune position ni raison n’est rapportée.
// - Indépendant de l’évaluateur : eval.rs ne revérifie rien de tout ça.

/// Opérateurs reconnus (binaires, unaires et factorielle postfixée).
const OPERATEURS: &[char] = &['+', '-', '*', '/', '^', '!'];

/// Seuls noms de fonctions acceptés.
const FONCTIONS: &[&str] = &["sin", "cos", "tan", "sqrt"];

fn est_operateur(c: char) -> bool {
    OPERATEURS.contains(&c)
}

fn est_structure(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '(' | ')' | '.')
}

/// Équilibre des parenthèses : jamais de ')' avant son '(' et compteur nul à la fin.
pub fn valider_parentheses(expression: &str) -> bool {
    let mut ouvertes: i64 = 0;
    for c in expression.chars() {
        match c {
            '(' => ouvertes += 1,
            ')' => {
                ouvertes -= 1;
                if ouvertes < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    ouvertes == 0
}

/// Valide une expression avant évaluation.
///
/// Règles (toutes nécessaires) :
/// - parenthèses équilibrées ;
/// - caractères : opérateurs `+-*/^!`, chiffres, `(`, `)`, `.`, lettres ;
/// - deux opérateurs ne se suivent pas, sauf `!` qui peut suivre n’importe lequel ;
/// - toute suite de lettres est un nom de fonction connu, suivi d’un chiffre ou de `(` ;
/// - un `.` suit un chiffre, au plus un par nombre ;
/// - au moins un chiffre ;
/// - pas d’opérateur final, sauf `!`.
pub fn valider_expression(expression: &str) -> bool {
    if !valider_parentheses(expression) {
        return false;
    }

    let chars: Vec<char> = expression.chars().collect();
    let mut dernier: Option<char> = None;
    let mut chiffre_vu = false;
    let mut point_permis = true;
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if !(est_operateur(c) || est_structure(c) || c.is_alphabetic()) {
            return false;
        }

        // Adjacence : `!` est la seule exception (ex: "5!!", "3*!").
        if est_operateur(c) && dernier.is_some_and(est_operateur) && c != '!' {
            return false;
        }

        if c.is_alphabetic() {
            let debut = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let nom: String = chars[debut..i].iter().collect();
            if !FONCTIONS.contains(&nom.as_str()) {
                return false;
            }

            // Le nom doit ouvrir un argument : "sin90", "sqrt(16)".
            match chars.get(i) {
                Some(&s) if s.is_ascii_digit() || s == '(' => {}
                _ => return false,
            }

            dernier = Some(chars[i - 1]);
            continue;
        }

        if c == '.' {
            if !dernier.is_some_and(|d| d.is_ascii_digit()) || !point_permis {
                return false;
            }
            point_permis = false;
        }

        if c.is_ascii_digit() {
            chiffre_vu = true;
        }

        if est_operateur(c) || c == '(' || c == ')' {
            point_permis = true;
        }

        dernier = Some(c);
        i += 1;
    }

    if dernier.is_some_and(|d| est_operateur(d) && d != '!') {
        return false;
    }

    chiffre_vu
}
