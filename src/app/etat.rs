//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir la saisie, l’historique et la boîte de dialogue ouverte,
//! et offrir les actions des boutons (insertion, CE, AC, =).
//!
//! Contrats :
//! - La saisie ne se construit qu’en ajoutant du texte (boutons) ou en
//!   rechargeant une ligne d’historique.
//! - "=" passe TOUJOURS par le validateur avant l’évaluateur (noyau::calculer).
//! - Aucune persistance : l’historique vit avec la fenêtre.

use log::{debug, info, warn};

use crate::noyau::{calculer, expression_de, format_resultat, ErreurCalcul, Historique};

/// Boîte de dialogue “modale” affichée par-dessus le clavier.
#[derive(Clone, Debug, PartialEq)]
pub enum Dialogue {
    Resultat { message: String },
    Erreur { titre: String, message: String },
}

impl Dialogue {
    pub fn titre(&self) -> &str {
        match self {
            Self::Resultat { .. } => "Résultat",
            Self::Erreur { titre, .. } => titre,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Resultat { message } | Self::Erreur { message, .. } => message,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- saisie (lecture seule au clavier) ---
    pub entree: String,

    // --- calculs passés ---
    pub historique: Historique,

    // --- sortie ---
    pub dialogue: Option<Dialogue>,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Chiffres, opérateurs, parenthèses, ".", "sqrt(", "sin"…
    pub fn inserer(&mut self, texte: &str) {
        self.entree.push_str(texte);
    }

    /// π : écriture décimale complète (le noyau n’a pas de constante).
    pub fn inserer_pi(&mut self) {
        self.entree.push_str(&std::f64::consts::PI.to_string());
    }

    /// CE : retire le dernier caractère.
    pub fn effacer_dernier(&mut self) {
        self.entree.pop();
    }

    /// AC : vide la saisie.
    pub fn tout_effacer(&mut self) {
        self.entree.clear();
    }

    /// Recharge l’expression d’une ligne d’historique ("<expr> = <résultat>").
    pub fn charger_historique(&mut self, index: usize) {
        if let Some(ligne) = self.historique.entrees().get(index) {
            self.entree = expression_de(ligne).to_string();
        }
    }

    pub fn fermer_dialogue(&mut self) {
        self.dialogue = None;
    }

    /// "=" : valide, évalue, archive puis ouvre la boîte de résultat ou d’erreur.
    pub fn calculer(&mut self) {
        let expression = self.entree.clone();
        debug!("calcul demandé: {expression:?}");

        match calculer(&expression) {
            Ok(valeur) => {
                let ligne = self.historique.ajouter(&expression, valeur);
                info!("{ligne}");
                self.dialogue = Some(Dialogue::Resultat {
                    message: format!("Résultat : {}", format_resultat(valeur)),
                });
            }
            Err(ErreurCalcul::Invalide) => {
                warn!("expression refusée: {expression:?}");
                self.dialogue = Some(Dialogue::Erreur {
                    titre: "Expression invalide".into(),
                    message: ErreurCalcul::Invalide.to_string(),
                });
            }
            Err(e) => {
                warn!("faute d’évaluation sur {expression:?}: {e}");
                self.dialogue = Some(Dialogue::Erreur {
                    titre: "Erreur de calcul".into(),
                    message: e.to_string(),
                });
            }
        }
    }
}
