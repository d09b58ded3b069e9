//! Summarize the résumé document

use anyhow::{Context, Result};
use std::fmt::Write;

use crate::portfolio::Portfolio;
use crate::Folio;

/// Print a summary of the portfolio document
pub fn run(folio: &Folio) -> Result<()> {
    let portfolio = folio
        .load_portfolio()
        .context("Error loading portfolio data")?;
    print!("{}", render(&portfolio)?);
    Ok(())
}

/// Render a short text summary of the portfolio
pub fn render(portfolio: &Portfolio) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{}", portfolio.name)?;
    if !portfolio.summary.is_empty() {
        writeln!(out, "{}", portfolio.summary)?;
    }

    writeln!(out, "\nExperience ({}):", portfolio.experience.len())?;
    for job in &portfolio.experience {
        writeln!(out, "  {} - {} ({})", job.title, job.company, job.dates)?;
    }

    writeln!(out, "\nProjects ({}):", portfolio.projects.len())?;
    for project in &portfolio.projects {
        match &project.url {
            Some(url) => writeln!(out, "  {} [{}] {}", project.name, project.date, url)?,
            None => writeln!(out, "  {} [{}]", project.name, project.date)?,
        }
    }

    writeln!(out, "\nSkills:")?;
    for group in portfolio.skills.keys() {
        writeln!(out, "  {}: {}", group, portfolio.skills_in(group).join(", "))?;
    }

    Ok(out)
}
