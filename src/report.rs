use clap::Args;
use food_insights::config::AppConfig;
use food_insights::error::AppError;
use food_insights::insights::{
    Entry, EntryImporter, RatingScale, RecommendationEngine, TasteReport,
};
use food_insights::telemetry;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Diary CSV export to score (scores an empty history when omitted)
    #[arg(long)]
    pub(crate) entries_csv: Option<PathBuf>,
    /// Scale the export's ratings use: five or ten (defaults to APP_RATING_SCALE)
    #[arg(long, value_parser = parse_rating_scale)]
    pub(crate) rating_scale: Option<RatingScale>,
    /// Print the recommendation as JSON instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

fn parse_rating_scale(raw: &str) -> Result<RatingScale, String> {
    raw.parse()
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        entries_csv,
        rating_scale,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let entries: Vec<Entry> = match entries_csv {
        Some(path) => {
            let entries = EntryImporter::from_path(&path)?;
            info!(path = %path.display(), count = entries.len(), "diary entries imported");
            entries
        }
        None => Vec::new(),
    };

    let scale = rating_scale.unwrap_or(config.scoring.rating_scale);
    let engine = RecommendationEngine::new(scale);
    let report = engine.report(&entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&report.recommendation)?);
    } else {
        render_report(&mut io::stdout().lock(), &report, engine.rating_scale())?;
    }

    Ok(())
}

fn render_report<W: Write>(
    out: &mut W,
    report: &TasteReport,
    scale: RatingScale,
) -> io::Result<()> {
    let profile = &report.profile;

    writeln!(out, "Taste profile")?;
    writeln!(
        out,
        "- {} entries | average rating {:.1}/5 (input scale: {})",
        profile.total_entries,
        profile.average_rating,
        scale.label()
    )?;
    writeln!(out, "- spice preference {:.1}", profile.spice_preference)?;

    if profile.preferred_flavors.is_empty() {
        writeln!(out, "- favorite flavors: none yet")?;
    } else {
        let flavors: Vec<&str> = profile
            .preferred_flavors
            .iter()
            .map(|flavor| flavor.label())
            .collect();
        writeln!(out, "- favorite flavors: {}", flavors.join(", "))?;
    }

    if profile.tried_cuisines.is_empty() {
        writeln!(out, "- cuisines tried: none detected")?;
    } else {
        writeln!(out, "- cuisines tried: {}", profile.tried_cuisines.join(", "))?;
    }

    let mut traits = Vec::new();
    if profile.variety_seeker {
        traits.push("variety seeker");
    }
    if profile.quality_seeker {
        traits.push("quality seeker");
    }
    if !traits.is_empty() {
        writeln!(out, "- {}", traits.join(", "))?;
    }

    let recommendation = &report.recommendation;
    if recommendation.cuisines.is_empty() {
        writeln!(out, "\nCuisines to try: you've covered the whole catalog")?;
    } else {
        writeln!(out, "\nCuisines to try")?;
        for cuisine in &recommendation.cuisines {
            let reasons = if cuisine.reasons.is_empty() {
                String::new()
            } else {
                format!(" ({})", cuisine.reasons.join("; "))
            };
            writeln!(out, "- {} {}%{}", cuisine.name, cuisine.confidence, reasons)?;
        }
    }

    if report.candidates.len() > recommendation.cuisines.len() {
        writeln!(out, "\nFull ranking")?;
        for candidate in &report.candidates {
            let breakdown: Vec<String> = candidate
                .components
                .iter()
                .map(|component| format!("{:+.1} {}", component.points, component.notes))
                .collect();
            writeln!(
                out,
                "- {}: {:.1} [{}]",
                candidate.name,
                candidate.score,
                breakdown.join(", ")
            )?;
        }
    }

    if !recommendation.dishes.is_empty() {
        writeln!(out, "\nDishes")?;
        for dish in &recommendation.dishes {
            writeln!(out, "- {} ({})", dish.name, dish.cuisine)?;
        }
    }

    if !recommendation.tips.is_empty() {
        writeln!(out, "\nTips")?;
        for tip in &recommendation.tips {
            writeln!(out, "- {tip}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_scale_flag_accepts_aliases() {
        assert_eq!(parse_rating_scale("10"), Ok(RatingScale::Ten));
        assert!(parse_rating_scale("percent").is_err());
    }

    fn rendered(report: &TasteReport, scale: RatingScale) -> String {
        let mut out = Vec::new();
        render_report(&mut out, report, scale).expect("render to buffer");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn render_describes_empty_history() {
        let engine = RecommendationEngine::default();
        let text = rendered(&engine.report(&[]), engine.rating_scale());

        assert!(text.starts_with("Taste profile\n"));
        assert!(text.contains("- 0 entries | average rating 0.0/5 (input scale: five)"));
        assert!(text.contains("- spice preference 2.5"));
        assert!(text.contains("- favorite flavors: none yet"));
        assert!(text.contains("- cuisines tried: none detected"));
        assert!(text.contains("\nCuisines to try\n- Chinese "));
        assert!(text.contains("\nFull ranking\n"));
        assert!(text.contains("\nDishes\n- Kung Pao Chicken (Chinese)"));
        assert!(!text.contains("\nTips"));
    }

    #[test]
    fn render_lists_profile_traits_and_tips() {
        let engine = RecommendationEngine::new(RatingScale::Ten);
        let entries = vec![
            Entry::new("Pad See Ew", 8.0, ["thai", "sweet"]),
            Entry::new("Tonkotsu", 10.0, ["japanese", "savory"]),
            Entry::new("Tacos", 8.0, ["mexican", "spicy"]),
        ];
        let text = rendered(&engine.report(&entries), engine.rating_scale());

        assert!(text.contains("- 3 entries | average rating 4.3/5 (input scale: ten)"));
        assert!(text.contains("- favorite flavors: spicy, sweet, savory"));
        assert!(text.contains("- cuisines tried: mexican, japanese, thai"));
        assert!(text.contains("- variety seeker, quality seeker"));
        assert!(text.contains("\nTips\n"));
        assert!(text.contains("fusion"));
    }
}
