// src/noyau/historique.rs
//
// Historique en mémoire des calculs réussis ("<expr> = <résultat>").
// Pas de persistance : tout est perdu à la fermeture.

use std::collections::VecDeque;

use super::format::format_calcul;

/// Séparateur entre l’expression et son résultat.
pub const SEPARATEUR: &str = " = ";

/// Garde-fou : au-delà, les plus anciennes entrées sont oubliées.
const CAPACITE_MAX: usize = 500;

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<String>,
}

impl Historique {
    /// Ajoute un calcul et retourne la ligne enregistrée.
    pub fn ajouter(&mut self, expression: &str, resultat: f64) -> &str {
        if self.entrees.len() >= CAPACITE_MAX {
            self.entrees.pop_front();
        }
        self.entrees.push_back(format_calcul(expression, resultat));
        self.entrees.back().map_or("", String::as_str)
    }

    /// Plus ancienne d’abord.
    pub fn entrees(&self) -> &VecDeque<String> {
        &self.entrees
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }
}

/// Expression d’une ligne d’historique : tout ce qui précède le premier " = ".
///
/// L’expression ne contient jamais " = " (espace et '=' sont refusés par le
/// validateur), donc le découpage est sans ambiguïté.
pub fn expression_de(entree: &str) -> &str {
    entree
        .split_once(SEPARATEUR)
        .map_or(entree, |(expression, _)| expression)
}
