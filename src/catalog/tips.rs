//! Per-method pro tips shown alongside the recipe.

use super::BrewMethod;

/// Pro tips for a method, in display order.
pub fn pro_tips(method: BrewMethod) -> &'static [&'static str] {
    match method {
        BrewMethod::Espresso => &[
            "Aim for a 25-30s extraction.",
            "Flow should look like warm honey/mouse tail.",
            "If it flows too fast, grind finer.",
        ],
        BrewMethod::AeroPress => &[
            "Insert plunger just enough to create a vacuum to stop drips.",
            "Press gently for 30 seconds.",
            "Invert method allows for longer immersion time.",
        ],
        BrewMethod::AeroPressFlowControl => &[
            "Use the Prismo/Joepresso attachment.",
            "No inversion needed with flow control cap.",
            "Press firmly to generate more pressure.",
        ],
        BrewMethod::V60 => &[
            "Pour in slow concentric circles.",
            "Avoid hitting the paper walls directly.",
            "Bloom with 2-3x weight of grounds for 45s.",
        ],
        BrewMethod::FrenchPress => &[
            "Let the crust form on top for 4 minutes.",
            "Break the crust gently before plunging.",
            "Don't plunge all the way down to avoid stirring sediment.",
        ],
        BrewMethod::MokaPot => &[
            "Use hot water in the chamber to start.",
            "Don't tamp the coffee, just level it.",
            "Remove from heat as soon as it starts sputtering.",
        ],
        BrewMethod::ColdBrew => &[
            "Steep at room temp for 12-24 hours.",
            "Dilute concentrate 1:1 with water/milk.",
            "Use coarse grind to avoid bitterness.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_method_has_tips() {
        for method in BrewMethod::ALL {
            assert!(!pro_tips(method).is_empty());
        }
    }
}
