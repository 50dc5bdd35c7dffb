//! Moteur de la calculatrice : état accumulateur + une méthode par bouton.
//!
//! Contrats :
//! - L’affichage est toujours un littéral entier, un littéral décimal,
//!   la sentinelle `ERROR`, ou vide (juste après un opérateur).
//! - Une erreur de calcul affiche `ERROR` et ne touche ni la mémoire ni l’opérande en attente.
//! - Un affichage illisible rend la touche sans effet (journalisé).
//! - Rien ne panique, rien ne remonte à l’appelant.

use log::{debug, warn};

use super::erreur::ErreurCalcul;
use super::format::{formater_nombre, lire_affichage, SENTINELLE_ERREUR};
use super::operations::{self, Operateur};

/// Affichage initial (et après AC).
const AFFICHAGE_ZERO: &str = "0";

/// Les deux états de la machine “opérateur”.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Etat {
    /// État initial, ou résultat affiché après `=`.
    AttentePremierOperande,
    /// Un opérateur vient d’être choisi : on saisit le second opérande.
    AttenteSecondOperande,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculatrice {
    affichage: String,
    operande: f64,
    operateur: Option<Operateur>,
    memoire: f64,
    etat: Etat,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_ZERO.to_string(),
            operande: 0.0,
            operateur: None,
            memoire: 0.0,
            etat: Etat::AttentePremierOperande,
        }
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture de l’état ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn operande_en_attente(&self) -> f64 {
        self.operande
    }

    /// Dernier opérateur choisi. Conservé après `=` (le `=` répété le réapplique).
    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn etat(&self) -> Etat {
        self.etat
    }

    pub fn est_en_erreur(&self) -> bool {
        self.affichage == SENTINELLE_ERREUR
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre 0..=9 : remplace un `0` seul (ou `ERROR`), sinon s’ajoute à la fin.
    pub fn saisir_chiffre(&mut self, chiffre: u8) {
        if chiffre > 9 {
            warn!("chiffre refusé : {chiffre}");
            return;
        }

        let c = char::from(b'0' + chiffre);
        if self.affichage == AFFICHAGE_ZERO || self.est_en_erreur() {
            self.affichage.clear();
        }
        self.affichage.push(c);

        // au-delà de f64::MAX le nombre ne se relit plus
        if lire_affichage(&self.affichage).is_err() {
            self.affichage.pop();
            warn!("chiffre {chiffre} ignoré : nombre trop grand");
        }
    }

    /// Point décimal : un seul par nombre.
    pub fn saisir_point(&mut self) {
        if self.affichage.is_empty() || self.est_en_erreur() {
            self.affichage = "0.".to_string();
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// +/- : change le signe de la valeur affichée.
    pub fn changer_signe(&mut self) {
        if let Some(v) = self.lire("-/+") {
            self.affichage = formater_nombre(-v);
        }
    }

    /* ------------------------ Opérateurs binaires ------------------------ */

    /// Mémorise l’affichage comme premier opérande et vide l’affichage.
    ///
    /// Affichage vide alors qu’un opérateur attend : l’opérateur est simplement remplacé.
    pub fn choisir_operateur(&mut self, op: Operateur) {
        if self.affichage.is_empty() && self.operateur.is_some() {
            debug!("opérateur remplacé : {}", op.symbole());
            self.operateur = Some(op);
            self.etat = Etat::AttenteSecondOperande;
            return;
        }

        let Some(v) = self.lire(op.symbole()) else {
            return;
        };

        self.operande = v;
        self.operateur = Some(op);
        self.affichage.clear();
        self.etat = Etat::AttenteSecondOperande;
    }

    /// `=` : applique l’opérateur en attente à (opérande, affichage).
    ///
    /// L’opérande et l’opérateur restent en place : un second `=` recalcule
    /// `opérande ⊕ résultat`. Sans opérateur en attente, le résultat vaut 0.
    pub fn egal(&mut self) {
        let Some(b) = self.lire("=") else {
            return;
        };

        match self.operateur {
            Some(op) => {
                let r = op.appliquer(self.operande, b);
                self.deposer(op.symbole(), r);
            }
            None => {
                debug!("= sans opérateur (affichage {b}) : résultat 0");
                self.affichage = formater_nombre(0.0);
            }
        }

        self.etat = Etat::AttentePremierOperande;
    }

    /* ------------------------ Fonctions scientifiques ------------------------ */

    /// x!
    pub fn factorielle(&mut self) {
        self.unaire("x!", operations::factorielle);
    }

    /// ln x
    pub fn logarithme(&mut self) {
        self.unaire("log", operations::logarithme);
    }

    /// 1/x
    pub fn inverse(&mut self) {
        self.unaire("1/x", operations::inverse);
    }

    /// √x
    pub fn racine(&mut self) {
        self.unaire("sqr", operations::racine);
    }

    /* ------------------------ Mémoire ------------------------ */

    /// MC
    pub fn memoire_effacer(&mut self) {
        self.memoire = 0.0;
    }

    /// M+
    pub fn memoire_ajouter(&mut self) {
        if let Some(v) = self.lire("M+") {
            self.cumuler_memoire(self.memoire + v);
        }
    }

    /// M-
    pub fn memoire_soustraire(&mut self) {
        if let Some(v) = self.lire("M-") {
            self.cumuler_memoire(self.memoire - v);
        }
    }

    /// MR
    pub fn memoire_rappeler(&mut self) {
        self.affichage = formater_nombre(self.memoire);
    }

    /// AC : affichage à `0`, la mémoire n’est pas touchée.
    pub fn tout_effacer(&mut self) {
        self.affichage = AFFICHAGE_ZERO.to_string();
    }

    /* ------------------------ Interne ------------------------ */

    fn lire(&self, touche: &str) -> Option<f64> {
        match lire_affichage(&self.affichage) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("touche {touche} ignorée : {e}");
                None
            }
        }
    }

    fn unaire(&mut self, touche: &str, f: fn(f64) -> Result<f64, ErreurCalcul>) {
        if let Some(v) = self.lire(touche) {
            self.deposer(touche, f(v));
        }
    }

    fn deposer(&mut self, touche: &str, r: Result<f64, ErreurCalcul>) {
        match r {
            Ok(v) => self.affichage = formater_nombre(v),
            Err(e) => {
                debug!("touche {touche} : {e}");
                self.affichage = SENTINELLE_ERREUR.to_string();
            }
        }
    }

    fn cumuler_memoire(&mut self, v: f64) {
        if v.is_finite() {
            self.memoire = v;
        } else {
            warn!("mémoire inchangée : {}", ErreurCalcul::Depassement);
        }
    }
}
