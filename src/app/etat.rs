//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la calculatrice du noyau + la dernière ligne de journal
//! affichée sous l’écran (rapport `txt`).
//!
//! Contrats :
//! - Aucun calcul ici : chaque bouton est transmis tel quel au noyau.
//! - Une seule calculatrice par fenêtre.

use calculatrice_sci::noyau::{Calculatrice, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,

    /// Dernier rapport (`txt`), vide sinon.
    pub journal: String,
}

impl AppCalc {
    /// Bouton cliqué (ou raccourci clavier).
    pub fn appuyer(&mut self, touche: Touche) {
        if let Some(ligne) = self.calc.appuyer(touche) {
            self.journal = ligne;
        }
    }

    /// Texte de l’écran ; vide (juste après un opérateur) s’affiche comme un blanc.
    pub fn ecran(&self) -> &str {
        self.calc.affichage()
    }
}
