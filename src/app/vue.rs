// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Écran lecture seule en haut (monospace, cadre)
// - Pavé 4 colonnes : mémoire, fonctions, chiffres, opérateurs
// - Chaque bouton envoie sa `Touche` au noyau, rien d’autre

use eframe::egui;

use calculatrice_sci::noyau::{Operateur, Touche};

use super::etat::AppCalc;

/// Pavé, ligne par ligne.
const PAVE: [[Touche; 4]; 7] = [
    [
        Touche::MemoireEffacer,
        Touche::MemoireRappeler,
        Touche::MemoireAjouter,
        Touche::MemoireSoustraire,
    ],
    [
        Touche::Factorielle,
        Touche::Logarithme,
        Touche::Inverse,
        Touche::Racine,
    ],
    [
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Divise),
    ],
    [
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Fois),
    ],
    [
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Moins),
    ],
    [
        Touche::Chiffre(0),
        Touche::Point,
        Touche::Signe,
        Touche::Operateur(Operateur::Plus),
    ],
    [
        Touche::ToutEffacer,
        Touche::Operateur(Operateur::Puissance),
        Touche::Rapport,
        Touche::Egal,
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        if !self.journal.is_empty() {
            ui.add_space(6.0);
            ui.separator();
            ui.monospace(self.journal.as_str());
        }
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let texte = self.ecran().to_string();
        let erreur = self.calc.est_en_erreur();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(ui.text_style_height(&egui::TextStyle::Monospace) * 1.5);
                if erreur {
                    ui.colored_label(ui.visuals().error_fg_color, texte);
                } else {
                    ui.monospace(texte);
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let resp = ui.add_sized([60.0, 34.0], egui::Button::new(touche.libelle()));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
