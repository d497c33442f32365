//! Dialer - coffee recipe dialing calculator
//!
//! Builds a recipe from a method preset (or a shared locator), applies
//! any requested adjustments, and prints the plain-text summary.
//!
//! # Usage
//!
//! ```bash
//! dialer --method V60 --dose 25 --bitter high --grinder K6
//! dialer --from 'm=AeroPress&d=17&w=280&tm=92&ti=150&g=650'
//! ```

use std::path::PathBuf;

use clap::Parser;
use dialer_core::{
    error::{DialerError, Result},
    share::{hydrate_query, recipe_summary, share_query, SummaryContext},
    store::{NotesStore, MAX_RATING},
    BrewMethod, FilterType, GrinderModel, Intensity, RecipeController, RoastLevel, TasteFeedback,
};

/// Coffee recipe dialing calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Brew method name, e.g. "V60" or "French Press"
    #[arg(short, long)]
    method: Option<String>,

    /// Hydrate from a shared locator query string
    #[arg(long, value_name = "QUERY")]
    from: Option<String>,

    /// Coffee dose in grams (water follows while the ratio is locked)
    #[arg(short, long)]
    dose: Option<f64>,

    /// Brew water in ml (dose follows while the ratio is locked)
    #[arg(short, long)]
    water: Option<f64>,

    /// Filter type: Paper, Metal, or Both
    #[arg(short, long)]
    filter: Option<String>,

    /// Roast level: Light, Medium, Medium-Dark, or Dark
    #[arg(short, long)]
    roast: Option<String>,

    /// Last cup tasted sour; optionally "low" or "high" intensity
    #[arg(long, value_name = "INTENSITY", num_args = 0..=1, default_missing_value = "normal")]
    sour: Option<String>,

    /// Last cup tasted bitter; optionally "low" or "high" intensity
    #[arg(long, value_name = "INTENSITY", num_args = 0..=1, default_missing_value = "normal")]
    bitter: Option<String>,

    /// Grinder id for the conversion line, e.g. K6 or C40
    #[arg(short, long)]
    grinder: Option<String>,

    /// Rate the last cup, 0-10 (persisted)
    #[arg(long)]
    rating: Option<u32>,

    /// Note on the last cup (persisted)
    #[arg(long)]
    notes: Option<String>,

    /// Path of the rating/notes store
    #[arg(long, default_value = "dialer-notes.json")]
    store: PathBuf,
}

fn intensity_from_flag(value: &str) -> Intensity {
    match value {
        "low" => Intensity::Low,
        "high" => Intensity::High,
        _ => Intensity::Normal,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut controller = RecipeController::new();

    if let Some(query) = &args.from {
        hydrate_query(&mut controller, query);
    }

    if let Some(name) = &args.method {
        let method =
            BrewMethod::from_name(name).ok_or_else(|| DialerError::unknown_method(name))?;
        controller.select_method(method);
    }

    if let Some(dose) = args.dose {
        controller.set_dose(dose);
    }
    if let Some(water) = args.water {
        controller.set_water(water);
    }
    if let Some(name) = &args.filter {
        if let Some(filter) = FilterType::from_name(name) {
            controller.set_filter(filter);
        }
    }
    if let Some(name) = &args.roast {
        if let Some(roast) = RoastLevel::from_name(name) {
            controller.set_roast(roast);
        }
    }
    if let Some(intensity) = &args.sour {
        controller.taste_feedback(TasteFeedback::Sour, intensity_from_flag(intensity));
    }
    if let Some(intensity) = &args.bitter {
        controller.taste_feedback(TasteFeedback::Bitter, intensity_from_flag(intensity));
    }

    let grinder = match &args.grinder {
        Some(id) => {
            GrinderModel::from_id(id).ok_or_else(|| DialerError::unknown_grinder(id))?
        }
        None => GrinderModel::Microns,
    };

    // Rating/notes persist across sessions; recipe state does not.
    let store = NotesStore::new(&args.store);
    let mut session = store.load();
    if let Some(rating) = args.rating {
        if rating > MAX_RATING as u32 {
            return Err(DialerError::RatingOutOfRange { value: rating });
        }
        session.rating = rating as u8;
    }
    if let Some(notes) = &args.notes {
        session.notes = notes.clone();
    }
    if args.rating.is_some() || args.notes.is_some() {
        store.save(&session)?;
    }

    let query = share_query(controller.recipe());
    let ctx = SummaryContext {
        rating: session.rating,
        notes: &session.notes,
        grinder,
        share_url: Some(query.as_str()),
    };
    print!("{}", recipe_summary(controller.recipe(), &ctx));

    Ok(())
}
