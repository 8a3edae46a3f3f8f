//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - validation.rs : oracle accepte/refuse (aucun calcul)
//! - eval.rs       : descente récursive expression -> terme -> facteur (f64)
//! - calcul.rs     : pipeline valider puis évaluer
//! - format.rs     : texte d’un résultat, ligne "<expr> = <résultat>"
//! - historique.rs : calculs passés (mémoire seulement)

pub mod calcul;
pub mod eval;
pub mod format;
pub mod historique;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calcul::{calculer, ErreurCalcul};
pub use format::format_resultat;
pub use historique::{expression_de, Historique};
