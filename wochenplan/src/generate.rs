//! The generation pipeline, top to bottom.

use std::fs;

use anyhow::{Context, Result};
use lopdf::Document;
use tracing::info;
use wp_compose::{AustrianGerman, Composer, SpecialDates};
use wp_layout::Grid;
use wp_pdf::{read_asset, stamp_template, two_up, DocumentAuthor, Template};
use wp_time::HolidayTable;

use crate::config::Config;

/// Produce both output documents for the configured year.
pub fn run(config: &Config) -> Result<()> {
    info!(year = config.year, "generating week planner");

    // only the template is indispensable; font, logo and special dates
    // degrade the output instead of stopping the run
    let template = Template::load(&config.template).context("loading page template")?;
    let holidays =
        HolidayTable::for_year(config.year).context("building the holiday table")?;
    let specials = SpecialDates::load_csv(&config.special_dates)
        .into_option()
        .unwrap_or_else(SpecialDates::new);
    let font = read_asset(&config.font, "font");
    let logo = read_asset(&config.logo, "cover logo");

    let mut author = DocumentAuthor::new(
        &format!("Mein Kalender {}", config.year),
        template.width_mm(),
        template.height_mm(),
        Grid::new(config.column_width_mm),
        font,
    )
    .context("starting the planner document")?;
    author.cover(&config.cover_title, config.year, logo);

    let names = AustrianGerman;
    let weeks = Composer::new(&holidays, &specials, &names)
        .compose(config.year, &mut author)
        .context("composing week pages")?;
    info!(weeks, pages = weeks + 1, "composed the year");

    let bytes = author.finish().context("serializing the planner document")?;
    let mut primary =
        Document::load_mem(&bytes).context("reparsing the authored document")?;
    stamp_template(&mut primary, &template).context("stamping the template")?;

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("creating output directory {}", config.output_dir.display())
    })?;
    let primary_path = config.primary_path();
    primary
        .save(&primary_path)
        .with_context(|| format!("writing {}", primary_path.display()))?;
    info!(path = %primary_path.display(), "wrote primary document");

    let mut secondary = two_up(&primary).context("repacking two-up")?;
    let secondary_path = config.secondary_path();
    secondary
        .save(&secondary_path)
        .with_context(|| format!("writing {}", secondary_path.display()))?;
    info!(path = %secondary_path.display(), "wrote secondary document");

    Ok(())
}
