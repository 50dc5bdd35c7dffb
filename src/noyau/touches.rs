// src/noyau/touches.rs
//
// Touches (boutons) + banc d’essai textuel.
//
// Un jeton texte ("5", "+", "x!", "MR", "txt"…) devient une `Touche`,
// puis `Calculatrice::appuyer` l’envoie à la bonne opération.
// Jeton inconnu => ErreurTouche::Inconnue, état intact.

use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};

use super::erreur::ErreurTouche;
use super::moteur::Calculatrice;
use super::operations::Operateur;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Signe,
    Operateur(Operateur),
    Egal,
    Factorielle,
    Logarithme,
    Inverse,
    Racine,
    MemoireEffacer,
    MemoireAjouter,
    MemoireSoustraire,
    MemoireRappeler,
    ToutEffacer,
    /// "txt" : rapporte l’affichage sans rien modifier.
    Rapport,
}

impl Touche {
    /// Libellé du bouton (aussi accepté comme jeton).
    pub fn libelle(self) -> &'static str {
        const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Chiffre(d) => CHIFFRES.get(d as usize).copied().unwrap_or("?"),
            Self::Point => ".",
            Self::Signe => "-/+",
            Self::Operateur(op) => op.symbole(),
            Self::Egal => "=",
            Self::Factorielle => "x!",
            Self::Logarithme => "log",
            Self::Inverse => "1/x",
            Self::Racine => "sqr",
            Self::MemoireEffacer => "MC",
            Self::MemoireAjouter => "M+",
            Self::MemoireSoustraire => "M-",
            Self::MemoireRappeler => "MR",
            Self::ToutEffacer => "AC",
            Self::Rapport => "txt",
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}

impl FromStr for Touche {
    type Err = ErreurTouche;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let jeton = s.trim();

        if let [b @ b'0'..=b'9'] = jeton.as_bytes() {
            return Ok(Self::Chiffre(b - b'0'));
        }

        let t = match jeton {
            "." => Self::Point,
            "-/+" => Self::Signe,
            "+" => Self::Operateur(Operateur::Plus),
            "-" => Self::Operateur(Operateur::Moins),
            "*" => Self::Operateur(Operateur::Fois),
            "/" => Self::Operateur(Operateur::Divise),
            "**" | "^" | "x^y" => Self::Operateur(Operateur::Puissance),
            "=" => Self::Egal,
            "x!" => Self::Factorielle,
            "log" => Self::Logarithme,
            "1/x" => Self::Inverse,
            "sqr" => Self::Racine,
            "MC" => Self::MemoireEffacer,
            "M+" => Self::MemoireAjouter,
            "M-" => Self::MemoireSoustraire,
            "MR" => Self::MemoireRappeler,
            "AC" => Self::ToutEffacer,
            "txt" => Self::Rapport,
            _ => return Err(ErreurTouche::Inconnue(s.to_string())),
        };
        Ok(t)
    }
}

impl Calculatrice {
    /// Appuie sur une touche. Renvoie la ligne de rapport pour `txt`, sinon None.
    pub fn appuyer(&mut self, touche: Touche) -> Option<String> {
        debug!("touche {touche} (affichage {:?})", self.affichage());

        match touche {
            Touche::Chiffre(d) => self.saisir_chiffre(d),
            Touche::Point => self.saisir_point(),
            Touche::Signe => self.changer_signe(),
            Touche::Operateur(op) => self.choisir_operateur(op),
            Touche::Egal => self.egal(),
            Touche::Factorielle => self.factorielle(),
            Touche::Logarithme => self.logarithme(),
            Touche::Inverse => self.inverse(),
            Touche::Racine => self.racine(),
            Touche::MemoireEffacer => self.memoire_effacer(),
            Touche::MemoireAjouter => self.memoire_ajouter(),
            Touche::MemoireSoustraire => self.memoire_soustraire(),
            Touche::MemoireRappeler => self.memoire_rappeler(),
            Touche::ToutEffacer => self.tout_effacer(),
            Touche::Rapport => {
                let ligne = format!("Le résultat est : {}", self.affichage());
                info!("{ligne}");
                return Some(ligne);
            }
        }
        None
    }

    /// Banc d’essai : parse le jeton puis appuie.
    pub fn executer_jeton(&mut self, jeton: &str) -> Result<Option<String>, ErreurTouche> {
        let touche = jeton.parse::<Touche>().inspect_err(|e| warn!("{e}"))?;
        Ok(self.appuyer(touche))
    }
}
