// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Saisie en lecture seule : elle ne se construit qu’avec les boutons
// - Historique déroulant : choisir une ligne recharge son expression
// - Résultat / erreur dans une boîte modale (OK ou Échap pour fermer)

use eframe::egui;

use super::etat::AppCalc;

/// Taille d’une touche du pavé.
const TOUCHE: [f32; 2] = [56.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_historique(ui);

        ui.add_space(6.0);
        self.ui_entree(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        self.ui_dialogue(ui);
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut choisi = None;

        egui::ComboBox::from_id_salt("historique")
            .width(ui.available_width())
            .selected_text(if self.historique.est_vide() {
                "Aucun calcul"
            } else {
                "Calculs précédents"
            })
            .show_ui(ui, |ui| {
                for (i, ligne) in self.historique.entrees().iter().enumerate() {
                    if ui.selectable_label(false, ligne).clicked() {
                        choisi = Some(i);
                    }
                }
            });

        if let Some(i) = choisi {
            self.charger_historique(i);
        }
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // &mut &str : TextEdit non éditable, mais sélectionnable
        let mut affichage = self.entree.as_str();
        ui.add(
            egui::TextEdit::singleline(&mut affichage)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Heading)
                .horizontal_align(egui::Align::RIGHT)
                .id_salt("entree"),
        );
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "AC", Touche::ToutEffacer);
                self.bouton(ui, "CE", Touche::EffacerDernier);
                self.bouton(ui, "(", Touche::Texte("("));
                self.bouton(ui, ")", Touche::Texte(")"));
                self.bouton(ui, "/", Touche::Texte("/"));
                ui.end_row();

                self.bouton(ui, "sin", Touche::Texte("sin"));
                self.bouton(ui, "7", Touche::Texte("7"));
                self.bouton(ui, "8", Touche::Texte("8"));
                self.bouton(ui, "9", Touche::Texte("9"));
                self.bouton(ui, "*", Touche::Texte("*"));
                ui.end_row();

                self.bouton(ui, "cos", Touche::Texte("cos"));
                self.bouton(ui, "4", Touche::Texte("4"));
                self.bouton(ui, "5", Touche::Texte("5"));
                self.bouton(ui, "6", Touche::Texte("6"));
                self.bouton(ui, "-", Touche::Texte("-"));
                ui.end_row();

                self.bouton(ui, "tan", Touche::Texte("tan"));
                self.bouton(ui, "1", Touche::Texte("1"));
                self.bouton(ui, "2", Touche::Texte("2"));
                self.bouton(ui, "3", Touche::Texte("3"));
                self.bouton(ui, "+", Touche::Texte("+"));
                ui.end_row();

                self.bouton(ui, "sqrt", Touche::Texte("sqrt("));
                self.bouton(ui, "pi", Touche::Pi);
                self.bouton(ui, "0", Touche::Texte("0"));
                self.bouton(ui, ".", Touche::Texte("."));
                self.bouton(ui, "^", Touche::Texte("^"));
                ui.end_row();

                self.bouton(ui, "!", Touche::Texte("!"));
                ui.label("");
                ui.label("");
                ui.label("");
                self.bouton(ui, "=", Touche::Calculer);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        if !ui.add_sized(TOUCHE, egui::Button::new(label)).clicked() {
            return;
        }

        match touche {
            Touche::Texte(t) => self.inserer(t),
            Touche::Pi => self.inserer_pi(),
            Touche::EffacerDernier => self.effacer_dernier(),
            Touche::ToutEffacer => self.tout_effacer(),
            Touche::Calculer => self.calculer(),
        }
    }

    fn ui_dialogue(&mut self, ui: &mut egui::Ui) {
        let Some(dialogue) = self.dialogue.clone() else {
            return;
        };

        let reponse = egui::Modal::new(egui::Id::new("dialogue")).show(ui.ctx(), |ui| {
            ui.set_min_width(260.0);
            ui.heading(dialogue.titre());
            ui.add_space(6.0);
            ui.label(dialogue.message());
            ui.add_space(10.0);
            ui.button("OK").clicked()
        });

        if reponse.inner || reponse.should_close() {
            self.fermer_dialogue();
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Texte(&'static str),
    Pi,
    EffacerDernier,
    ToutEffacer,
    Calculer,
}
