// src/noyau/format.rs
//
// Affichage d’un résultat f64 “comme un littéral flottant” :
// toujours une partie décimale ou un exposant (14 -> "14.0").

/// Texte d’un résultat pour la boîte de dialogue et l’historique.
pub fn format_resultat(x: f64) -> String {
    // Debug de f64 garde ".0" sur les entiers et bascule en exposant aux extrêmes.
    format!("{x:?}")
}

/// Ligne d’historique : "<expression> = <résultat>".
pub fn format_calcul(expression: &str, x: f64) -> String {
    format!("{expression} = {}", format_resultat(x))
}
