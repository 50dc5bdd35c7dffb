// src/main.rs
//
// Calculatrice — point d’entrée
// -----------------------------
// - Sans argument : fenêtre native (eframe::run_native)
// - Avec des touches : banc d’essai textuel, une touche par argument
//     calculatrice_sci --verbeux -- 5 + 3 = txt
//   (les options viennent AVANT la première touche)
//
// Journal : RUST_LOG, sinon `warn` (ou `debug` avec --verbeux).

use std::io::{self, Write};

use clap::Parser;
use eframe::egui;

mod app;

use app::AppCalc;
use calculatrice_sci::noyau::Calculatrice;

/// Titre unique de la fenêtre.
const TITRE_APP: &str = "Calculatrice";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Calculatrice scientifique (fenêtre ou banc d’essai textuel)",
    after_help = "Les options se placent AVANT la première touche : \
                  tout ce qui suit une touche est lu comme une touche."
)]
struct Options {
    /// Touches à presser dans l’ordre (ex: 5 + 3 = txt). Sans touche : ouvre la fenêtre.
    /// Tout argument après la première touche est une touche.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    touches: Vec<String>,

    /// Journal détaillé (debug) si RUST_LOG n’est pas défini. À placer avant les touches.
    #[arg(short, long)]
    verbeux: bool,
}

fn installer_journal(verbeux: bool) {
    let niveau = if verbeux { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(niveau)).init();
}

/// Banc d’essai : chaque jeton est une touche ; `txt` écrit l’écran sur `sortie`,
/// un jeton inconnu écrit un diagnostic sur `erreurs` et la suite continue.
fn banc_essai(
    touches: &[String],
    sortie: &mut impl Write,
    erreurs: &mut impl Write,
) -> io::Result<()> {
    let mut calc = Calculatrice::new();
    for jeton in touches {
        match calc.executer_jeton(jeton) {
            Ok(Some(ligne)) => writeln!(sortie, "{ligne}")?,
            Ok(None) => {}
            Err(e) => writeln!(erreurs, "{e}")?,
        }
    }
    Ok(())
}

fn main() -> eframe::Result<()> {
    let options = Options::parse();
    installer_journal(options.verbeux);

    if !options.touches.is_empty() {
        if let Err(e) = banc_essai(&options.touches, &mut io::stdout(), &mut io::stderr()) {
            log::error!("banc d’essai interrompu : {e}");
        }
        return Ok(());
    }

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([300.0, 400.0])
            .with_min_inner_size([300.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        native,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
