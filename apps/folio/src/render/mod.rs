//! Config-to-page renderer.
//!
//! Flow: personal info → headline stats → profile photos → section
//!       fragments → publications page 1 → project filter "all" →
//!       closed modals → color scheme.
//!
//! Rendering is fail-soft. A section with no records keeps the shell's
//! placeholder content, a section whose container is missing or malformed
//! is skipped, and neither stops the sections after it.

pub mod fragments;
pub mod report;
pub mod shell;

use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::interaction::filter::{filter_tags, CategoryFilter, FilterView};
use crate::interaction::modal::{document_source, ModalSet};
use crate::interaction::pagination::{PageView, Paginator, DEFAULT_ITEMS_PER_PAGE};
use crate::models::portfolio::{HeadlineStats, PersonalInfo};
use crate::models::PortfolioConfig;

pub use report::{RenderReport, Section, SectionOutcome};
pub use shell::{Document, Selector};

/// Profile photos are only swapped in when a full hexagon set is given.
const MIN_PROFILE_PHOTOS: usize = 4;

const PUBLICATION_ITEM: Selector<'static> = Selector::Class("publication-item");
const PROJECT_ITEM: Selector<'static> = Selector::Class("portfolio-item");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub publications_per_page: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            publications_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Renders `config` into the page shell and applies the initial interaction
/// state. Without a configuration the shell keeps its default content and
/// only the interaction state is applied.
///
/// Steps:
/// 1. personal info → `.title-name`, `.title-role`, `.hero-description`
/// 2. headline stats → `data-target` of the `.stat-number` counters
/// 3. profile photos → `.hexagon` tiles (only with 4 or more photos)
/// 4. one fragment per record into each section container
/// 5. publications page 1 and its pagination controls
/// 6. project filter "all" and its filter buttons
/// 7. document, image and gallery overlays, all closed
/// 8. color scheme → `<style>` in `<head>`
pub fn render_page(
    doc: &mut Document,
    config: Option<&PortfolioConfig>,
    options: &RenderOptions,
) -> RenderReport {
    let mut report = RenderReport::default();

    match config {
        Some(config) => {
            report.config_loaded = true;

            // Steps 1-3: hero slots
            if let Some(personal) = &config.personal_info {
                apply_slot(&mut report, "personalInfo", apply_personal_info(doc, personal));
            }
            if let Some(stats) = &config.stats {
                apply_slot(&mut report, "stats", apply_stats(doc, stats));
            }
            if config.profile_photos.len() >= MIN_PROFILE_PHOTOS {
                apply_slot(
                    &mut report,
                    "profilePhotos",
                    apply_profile_photos(doc, &config.profile_photos),
                );
            } else if !config.profile_photos.is_empty() {
                debug!(
                    "Only {} profile photos configured; keeping the shell's photos",
                    config.profile_photos.len()
                );
            }

            // Step 4: section fragments
            render_sections(doc, config, &mut report);
        }
        None => info!("Portfolio configuration not loaded, using default content"),
    }

    // Step 5: publications pagination
    match show_publications_page(doc, options.publications_per_page, 1) {
        Ok(view) => {
            debug!(
                "Publications: page {} of {}",
                view.current_page, view.total_pages
            );
            report.applied.push("pagination".to_string());
        }
        Err(err) => warn!("Could not apply publications pagination: {}", err),
    }

    // Step 6: project filter
    match apply_project_filter(doc, &CategoryFilter::default()) {
        Ok(view) => {
            debug!(
                "Projects: {} of {} shown",
                view.visible_count(),
                view.items.len()
            );
            report.applied.push("projectFilter".to_string());
        }
        Err(err) => warn!("Could not apply project filter: {}", err),
    }

    // Step 7: modal overlays
    let cv_file = config
        .and_then(|c| c.personal_info.as_ref())
        .map(|p| p.cv_file.as_str())
        .unwrap_or("");
    apply_slot(
        &mut report,
        "modals",
        apply_modals(doc, &ModalSet::default(), cv_file),
    );

    // Step 8: color scheme
    if let Some(colors) = config.and_then(|c| c.colors.as_ref()) {
        let style = fragments::color_style(colors);
        if !style.is_empty() && doc.append_to_head(&style) {
            report.applied.push("colors".to_string());
        }
    }

    info!(
        "Rendered {} sections ({} fragments); {} skipped empty, {} missing containers",
        report.rendered_count(),
        report.total_fragments(),
        report.skipped_sections().len(),
        report.missing_containers().len()
    );

    report
}

fn apply_slot(report: &mut RenderReport, slot: &str, result: Result<bool>) {
    match result {
        Ok(true) => report.applied.push(slot.to_string()),
        Ok(false) => debug!("No element for {} in the page shell", slot),
        Err(err) => warn!("Could not apply {}: {}", slot, err),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Hero slots
// ────────────────────────────────────────────────────────────────────────────

fn apply_personal_info(doc: &mut Document, personal: &PersonalInfo) -> Result<bool> {
    let mut applied = false;
    for (selector, text) in [
        (".title-name", &personal.name),
        (".title-role", &personal.title),
        (".hero-description", &personal.description),
    ] {
        if !text.is_empty() {
            applied |= doc.set_text(&Selector::parse(selector), text)?;
        }
    }
    Ok(applied)
}

fn apply_stats(doc: &mut Document, stats: &HeadlineStats) -> Result<bool> {
    let counter = Selector::Class("stat-number");
    let mut applied = false;
    for (nth, value) in [&stats.publications, &stats.projects, &stats.years_experience]
        .into_iter()
        .enumerate()
    {
        applied |= doc.set_attribute(&counter, nth, "data-target", &value.to_string())?;
    }
    Ok(applied)
}

fn apply_profile_photos(doc: &mut Document, photos: &[String]) -> Result<bool> {
    let hexagon = Selector::Class("hexagon");
    let mut applied = false;
    for (nth, photo) in photos.iter().enumerate() {
        if !doc.set_attribute(&hexagon, nth, "data-image", photo)? {
            break;
        }
        doc.set_attribute_in(&hexagon, nth, &Selector::Tag("img"), "src", photo)?;
        applied = true;
    }
    Ok(applied)
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Fills every section container in one pass. Containers are located in the
/// shell before any fragment goes in, so record content in one section
/// cannot hide or break the container of another.
fn render_sections(doc: &mut Document, config: &PortfolioConfig, report: &mut RenderReport) {
    let skills: Vec<(&String, &Vec<String>)> = config.skills.iter().collect();
    let social = config
        .social_media
        .as_ref()
        .map(|s| s.links())
        .unwrap_or_default();

    let sections = [
        section_markup(Section::Education, &config.education, |_, e| {
            fragments::education_item(e)
        }),
        section_markup(Section::Experience, &config.experience, |_, e| {
            fragments::experience_item(e)
        }),
        section_markup(Section::Skills, &skills, |_, (category, tags)| {
            fragments::skill_category(category, tags)
        }),
        section_markup(Section::Publications, &config.publications, |i, p| {
            fragments::publication_item(p, i)
        }),
        section_markup(Section::Projects, &config.projects, |_, p| {
            fragments::project_item(p)
        }),
        section_markup(Section::Awards, &config.awards, |_, a| fragments::award_item(a)),
        section_markup(Section::Languages, &config.languages, |_, l| {
            fragments::language_item(l)
        }),
        section_markup(Section::Expertise, &config.expertise, |_, e| {
            fragments::expertise_item(e)
        }),
        section_markup(Section::ResearchInterests, &config.research_interests, |_, r| {
            fragments::interest_card(r)
        }),
        section_markup(Section::Memberships, &config.memberships, |_, m| {
            fragments::membership_card(m)
        }),
        section_markup(Section::Conferences, &config.conferences, |_, c| {
            fragments::conference_card(c)
        }),
        section_markup(Section::Teaching, &config.teaching, |_, t| {
            fragments::teaching_card(t)
        }),
        section_markup(Section::SocialMedia, &social, |_, (network, url)| {
            fragments::social_link(network, url)
        }),
    ];

    let fills: Vec<(Selector, &str)> = sections
        .iter()
        .filter(|(_, records, _)| *records > 0)
        .map(|(section, _, markup)| (Selector::parse(section.container()), markup.as_str()))
        .collect();
    let mut results = doc.fill_containers(&fills).into_iter();

    for (section, records, _) in &sections {
        let outcome = if *records == 0 {
            SectionOutcome::SkippedEmpty
        } else {
            match results.next() {
                Some(Ok(true)) => SectionOutcome::Rendered {
                    fragments: *records,
                },
                Some(Err(err)) => {
                    debug!(
                        "Unusable {} container for {}: {}",
                        section.container(),
                        section.key(),
                        err
                    );
                    SectionOutcome::MissingContainer
                }
                _ => {
                    debug!(
                        "No {} container for {}; skipping",
                        section.container(),
                        section.key()
                    );
                    SectionOutcome::MissingContainer
                }
            }
        };
        debug!("Section {}: {:?}", section.key(), outcome);
        report.record(*section, outcome);
    }
}

/// One fragment per record, in record order, with the record count.
fn section_markup<T>(
    section: Section,
    records: &[T],
    fragment: impl Fn(usize, &T) -> String,
) -> (Section, usize, String) {
    let markup: String = records
        .iter()
        .enumerate()
        .map(|(index, record)| fragment(index, record))
        .collect();
    (section, records.len(), markup)
}

// ────────────────────────────────────────────────────────────────────────────
// Interaction state
// ────────────────────────────────────────────────────────────────────────────

/// Shows publications page `page` over the `.publication-item` elements in
/// the publications list and redraws the pagination controls.
pub fn show_publications_page(
    doc: &mut Document,
    per_page: usize,
    page: usize,
) -> Result<PageView> {
    let list = Selector::parse(Section::Publications.container());
    let items = doc.find_all_within(&list, &PUBLICATION_ITEM)?;
    let mut pager = Paginator::new(items.len(), per_page);
    let view = pager.show_page(page);

    for (element, item) in items.iter().zip(&view.items).rev() {
        let class = doc.attribute_of(element, "class")?.unwrap_or_default();
        let mut tokens: Vec<&str> = class
            .split_whitespace()
            .filter(|token| !token.starts_with("animate-slide-"))
            .collect();
        if let Some(anim) = item.reveal.class() {
            tokens.push(anim);
        }
        doc.set_attribute_on(element, "class", &tokens.join(" "))?;
        doc.set_attribute_on(element, "style", &item.style())?;
    }

    doc.replace_inner(
        &Selector::Class("pagination-controls"),
        &fragments::pagination_controls(&view),
    )?;
    Ok(view)
}

/// Applies `filter` to the `.portfolio-item` elements of the project grid by
/// their `data-category` and redraws the filter buttons. Items are written
/// in their settled state; the returned view says when a live page gets
/// there.
pub fn apply_project_filter(doc: &mut Document, filter: &CategoryFilter) -> Result<FilterView> {
    let grid = Selector::parse(Section::Projects.container());
    let items = doc.find_all_within(&grid, &PROJECT_ITEM)?;
    let categories = items
        .iter()
        .map(|item| doc.attribute_of(item, "data-category").map(Option::unwrap_or_default))
        .collect::<Result<Vec<String>>>()?;

    let view = filter.view(categories.iter().map(String::as_str));
    for (element, state) in items.iter().zip(&view.items).rev() {
        doc.set_attribute_on(element, "style", state.settled_style())?;
    }

    if !items.is_empty() {
        let buttons: String = filter_tags(categories.iter().map(String::as_str))
            .iter()
            .map(|tag| fragments::filter_button(tag, tag == filter.active()))
            .collect();
        doc.replace_inner(&Selector::Class("portfolio-filters"), &buttons)?;
    }
    Ok(view)
}

/// Draws the three overlays in their current state into `.modal-overlays`
/// and points the CV button at the document viewer source.
pub fn apply_modals(doc: &mut Document, modals: &ModalSet, cv_file: &str) -> Result<bool> {
    if !cv_file.is_empty() {
        doc.set_attribute(
            &Selector::Id("viewCvBtn"),
            0,
            "data-src",
            &document_source(cv_file),
        )?;
    }

    let overlays = [
        fragments::document_modal(&modals.document),
        fragments::image_modal(&modals.image),
        fragments::gallery_modal(&modals.gallery),
    ]
    .concat();
    doc.replace_inner(&Selector::Class("modal-overlays"), &overlays)
}
