//! Deterministic plain-text recipe summary for clipboard/export.

use crate::grind::{conversion_label, GrinderModel};
use crate::recipe::Recipe;

use super::format::{format_amount, format_brew_time, grind_description};

/// Session data that accompanies the recipe in the summary but is not
/// part of the recipe itself.
#[derive(Debug, Clone)]
pub struct SummaryContext<'a> {
    /// Last rating, 0-10
    pub rating: u8,
    /// Last free-text note
    pub notes: &'a str,
    /// Selected grinder; `Microns` means no conversion line
    pub grinder: GrinderModel,
    /// Shareable locator to append, if any
    pub share_url: Option<&'a str>,
}

impl Default for SummaryContext<'_> {
    fn default() -> Self {
        Self {
            rating: 0,
            notes: "",
            grinder: GrinderModel::Microns,
            share_url: None,
        }
    }
}

const RULE: &str = "---------------------------";

/// Render the recipe as deterministic plain text.
///
/// Contains method, dose, water, derived ratio (one decimal),
/// temperature, formatted time, grind with optional grinder
/// conversion, filter (filter-capable methods only), rating, notes,
/// and the method's pro tip.
pub fn recipe_summary(recipe: &Recipe, ctx: &SummaryContext<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!("Coffee Recipe: {}\n", recipe.method));
    out.push_str(RULE);
    out.push('\n');

    out.push_str(&format!("Dose: {}g\n", format_amount(recipe.dose)));
    out.push_str(&format!(
        "Water: {}ml (Ratio 1:{:.1})\n",
        format_amount(recipe.water),
        recipe.current_ratio()
    ));
    out.push_str(&format!("Temp: {}°C\n", recipe.temperature));
    out.push_str(&format!("Time: {}\n", format_brew_time(recipe.time)));

    match conversion_label(ctx.grinder, recipe.grind) {
        Some(label) => out.push_str(&format!(
            "Grind: {}: {} ({}µm)\n",
            ctx.grinder.display_name(),
            label,
            recipe.grind
        )),
        None => out.push_str(&format!(
            "Grind: {}µm ({})\n",
            recipe.grind,
            grind_description(recipe.grind)
        )),
    }

    if recipe.method.supports_filter() {
        out.push_str(&format!("Filter: {}\n", recipe.filter.name()));
    }

    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Rating: {}/10\n", ctx.rating));
    out.push_str(&format!("Notes: {}\n", ctx.notes));
    out.push_str(&format!("Pro Tip: {}\n", recipe.method.tips().join(" ")));

    if let Some(url) = ctx.share_url {
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!("Open: {url}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BrewMethod;
    use crate::recipe::{FilterType, RecipeController};

    #[test]
    fn test_summary_core_fields() {
        let recipe = Recipe::default();
        let text = recipe_summary(&recipe, &SummaryContext::default());
        assert!(text.contains("Coffee Recipe: V60"));
        assert!(text.contains("Dose: 20g"));
        assert!(text.contains("Water: 320ml (Ratio 1:16.0)"));
        assert!(text.contains("Temp: 96°C"));
        assert!(text.contains("Time: 3:00"));
        assert!(text.contains("Grind: 800µm (Medium-Fine)"));
        assert!(text.contains("Rating: 0/10"));
        assert!(text.contains("Pour in slow concentric circles."));
    }

    #[test]
    fn test_filter_line_only_for_filter_methods() {
        let v60 = recipe_summary(&Recipe::default(), &SummaryContext::default());
        assert!(!v60.contains("Filter:"));

        let mut c = RecipeController::new();
        c.select_method(BrewMethod::AeroPress);
        c.set_filter(FilterType::Metal);
        let aero = recipe_summary(c.recipe(), &SummaryContext::default());
        assert!(aero.contains("Filter: Metal"));
    }

    #[test]
    fn test_grinder_conversion_line() {
        let recipe = Recipe::default(); // 800µm
        let ctx = SummaryContext {
            grinder: GrinderModel::C40,
            ..SummaryContext::default()
        };
        let text = recipe_summary(&recipe, &ctx);
        assert!(text.contains("Grind: Comandante C40: 27 Clicks (800µm)"));
    }

    #[test]
    fn test_cold_brew_time_shows_hours() {
        let recipe = Recipe::from_preset(BrewMethod::ColdBrew);
        let text = recipe_summary(&recipe, &SummaryContext::default());
        assert!(text.contains("Time: 12:00:00"));
    }

    #[test]
    fn test_summary_is_deterministic() {
        let recipe = Recipe::default();
        let ctx = SummaryContext {
            rating: 7,
            notes: "floral, slightly thin",
            ..SummaryContext::default()
        };
        assert_eq!(recipe_summary(&recipe, &ctx), recipe_summary(&recipe, &ctx));
    }
}
