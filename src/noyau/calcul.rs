//! Noyau — pipeline complet, tel que l’appelle l’UI
//!
//! valider_expression -> (si accepté) evaluer_expression
//!
//! L’évaluateur n’est jamais appelé sur une expression refusée.

use thiserror::Error;

use super::eval::{evaluer_expression, ErreurEval};
use super::validation::valider_expression;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Refus du validateur (sans position ni raison).
    #[error("L’expression est invalide. Vérifiez votre saisie.")]
    Invalide,

    /// Faute de l’évaluateur sur une expression pourtant acceptée.
    #[error("{0}")]
    Evaluation(#[from] ErreurEval),
}

/// Valide puis évalue.
pub fn calculer(expression: &str) -> Result<f64, ErreurCalcul> {
    if !valider_expression(expression) {
        return Err(ErreurCalcul::Invalide);
    }
    Ok(evaluer_expression(expression)?)
}
