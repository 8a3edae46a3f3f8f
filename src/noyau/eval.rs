//! Noyau — évaluation (descente récursive)
//!
//! expression -> terme -> facteur, analysés et calculés en une seule passe,
//! caractère par caractère, sur des `f64`.
//!
//! Précondition : l’expression a déjà été acceptée par `valider_expression`.
//! Rien n’est revérifié ici (parenthèses, adjacence…) : sur une entrée refusée
//! par le validateur, le résultat peut être une erreur ou même une valeur.

use thiserror::Error;

/// Garde-fou : imbrication maximale (parenthèses, fonctions, signes, `^`).
/// Au-delà, la descente récursive risquerait de déborder la pile.
const PROFONDEUR_MAX: usize = 256;

/// Fautes d’évaluation : ne devraient jamais arriver sur une entrée validée.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Un facteur ne peut pas commencer ici, ou il reste du texte après l’expression.
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    /// Un facteur était attendu mais l’entrée est terminée.
    #[error("fin d’expression inattendue")]
    FinInattendue,

    #[error("parenthèse ')' manquante")]
    ParentheseManquante,

    #[error("parenthèse ')' manquante après l’argument de {0}")]
    ParentheseManquanteFonction(String),

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("expression trop imbriquée (plus de {} niveaux)", PROFONDEUR_MAX)]
    TropImbrique,
}

/// API publique : évalue une expression déjà validée.
pub fn evaluer_expression(expression: &str) -> Result<f64, ErreurEval> {
    Lecteur::new(expression).analyser()
}

/// Factorielle “boucle” : x * (x-1) * (x-2) * … tant que le compteur est > 0.
///
/// - x <= 0 : la boucle ne tourne pas, résultat exactement 1.
/// - x fractionnaire : produit des termes positifs (ex: 2.5 -> 2.5 * 1.5 * 0.5).
/// - x très grand : l’accumulateur devient infini (tous les termes sont > 0),
///   on s’arrête là ; sinon `i - 1.0 == i` au-delà de 2^53 et la boucle ne finit pas.
fn factorielle(x: f64) -> f64 {
    let mut acc = 1.0;
    let mut i = x;
    while i > 0.0 {
        acc *= i;
        if acc.is_infinite() {
            break;
        }
        i -= 1.0;
    }
    acc
}

/// Curseur de lecture : position + caractère courant (`None` = fin).
struct Lecteur {
    chars: Vec<char>,
    pos: usize,
    courant: Option<char>,
    profondeur: usize,
}

impl Lecteur {
    fn new(expression: &str) -> Self {
        let chars: Vec<char> = expression.chars().collect();
        let courant = chars.first().copied();
        Self {
            chars,
            pos: 0,
            courant,
            profondeur: 0,
        }
    }

    fn avancer(&mut self) {
        self.pos += 1;
        self.courant = self.chars.get(self.pos).copied();
    }

    /// Saute les espaces, puis consomme `attendu` s’il est le caractère courant.
    ///
    /// NOTE: c’est le seul endroit où les espaces sont sautés. Une espace au
    /// milieu d’un nombre ("1 2") ou d’un nom ("si n") coupe le jeton.
    fn manger(&mut self, attendu: char) -> bool {
        while self.courant == Some(' ') {
            self.avancer();
        }
        if self.courant == Some(attendu) {
            self.avancer();
            return true;
        }
        false
    }

    fn inattendu(&self) -> ErreurEval {
        match self.courant {
            Some(c) => ErreurEval::CaractereInattendu(c),
            None => ErreurEval::FinInattendue,
        }
    }

    fn texte(&self, debut: usize) -> String {
        self.chars[debut..self.pos].iter().collect()
    }

    fn analyser(mut self) -> Result<f64, ErreurEval> {
        let x = self.expression()?;
        if self.pos < self.chars.len() {
            return Err(self.inattendu());
        }
        Ok(x)
    }

    /// expression = terme (('+' terme) | ('-' terme))*
    fn expression(&mut self) -> Result<f64, ErreurEval> {
        let mut x = self.terme()?;
        loop {
            if self.manger('+') {
                x += self.terme()?;
            } else if self.manger('-') {
                x -= self.terme()?;
            } else {
                return Ok(x);
            }
        }
    }

    /// terme = facteur (('*' facteur) | ('/' facteur) | '!')*
    fn terme(&mut self) -> Result<f64, ErreurEval> {
        let mut x = self.facteur()?;
        loop {
            if self.manger('*') {
                x *= self.facteur()?;
            } else if self.manger('/') {
                x /= self.facteur()?;
            } else if self.manger('!') {
                x = factorielle(x);
            } else {
                return Ok(x);
            }
        }
    }

    /// Toute récursion passe par ici : '(' et argument de fonction via
    /// expression -> terme -> facteur, signes et exposant directement.
    fn facteur(&mut self) -> Result<f64, ErreurEval> {
        if self.profondeur >= PROFONDEUR_MAX {
            return Err(ErreurEval::TropImbrique);
        }
        self.profondeur += 1;
        let x = self.facteur_niveau();
        self.profondeur -= 1;
        x
    }

    /// facteur = ('+'|'-') facteur
    ///         | ( '(' expression ')' | nombre | fonction ) ('^' facteur)?
    fn facteur_niveau(&mut self) -> Result<f64, ErreurEval> {
        if self.manger('+') {
            return self.facteur();
        }
        if self.manger('-') {
            return Ok(-self.facteur()?);
        }

        let debut = self.pos;
        let x = if self.manger('(') {
            let x = self.expression()?;
            if !self.manger(')') {
                return Err(ErreurEval::ParentheseManquante);
            }
            x
        } else if self.courant.is_some_and(|c| c.is_ascii_digit() || c == '.') {
            while self.courant.is_some_and(|c| c.is_ascii_digit() || c == '.') {
                self.avancer();
            }
            let litteral = self.texte(debut);
            litteral
                .parse::<f64>()
                .map_err(|_| ErreurEval::NombreInvalide(litteral))?
        } else if self.courant.is_some_and(|c| c.is_ascii_lowercase()) {
            while self.courant.is_some_and(|c| c.is_ascii_lowercase()) {
                self.avancer();
            }
            let nom = self.texte(debut);
            let arg = if self.manger('(') {
                let arg = self.expression()?;
                if !self.manger(')') {
                    return Err(ErreurEval::ParentheseManquanteFonction(nom));
                }
                arg
            } else {
                self.facteur()?
            };
            appliquer_fonction(&nom, arg)?
        } else {
            return Err(self.inattendu());
        };

        if self.manger('^') {
            return Ok(x.powf(self.facteur()?));
        }

        Ok(x)
    }
}

/// sqrt directe ; sin/cos/tan prennent des degrés.
fn appliquer_fonction(nom: &str, x: f64) -> Result<f64, ErreurEval> {
    match nom {
        "sqrt" => Ok(x.sqrt()),
        "sin" => Ok(x.to_radians().sin()),
        "cos" => Ok(x.to_radians().cos()),
        "tan" => Ok(x.to_radians().tan()),
        _ => Err(ErreurEval::FonctionInconnue(nom.to_string())),
    }
}
