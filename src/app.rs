// src/app.rs
//
// Module App (racine)
// -------------------
// - Déclare les sous-modules (etat.rs + vue.rs)
// - Ré-exporte AppCalc (pour main.rs: use app::AppCalc;)
// - Fournit l’impl eframe::App + raccourcis clavier globaux

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use calculatrice_sci::noyau::Touche;
use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = AC, Entrée = "="
        let (esc, entree) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Enter),
            )
        });
        if esc {
            self.appuyer(Touche::ToutEffacer);
        }
        if entree {
            self.appuyer(Touche::Egal);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
