//! Fragment templates, one pure function per section record shape.
//!
//! Record fields are interpolated as-is (no escaping): the configuration is
//! authored content and may carry emoji or inline markup. Class names are
//! fixed; the stylesheet and the page's effect scripts select on them.

use crate::interaction::filter::ALL;
use crate::interaction::modal::{GalleryContent, Modal, GALLERY_PLACEHOLDER};
use crate::interaction::pagination::PageView;
use crate::models::portfolio::ColorScheme;
use crate::models::sections::{
    AwardEntry, ConferenceEntry, EducationEntry, ExperienceEntry, ExpertiseEntry, LanguageEntry,
    MembershipEntry, ProjectEntry, PublicationEntry, ResearchInterestEntry, TeachingEntry,
};

// ────────────────────────────────────────────────────────────────────────────
// Timeline sections
// ────────────────────────────────────────────────────────────────────────────

/// Shared timeline layout for education and experience.
fn timeline_item(
    logo: &str,
    alt: &str,
    heading: &str,
    place: &str,
    years: &str,
    badge: &str,
) -> String {
    format!(
        r#"
<div class="timeline-item">
    <div class="timeline-dot"></div>
    <div class="timeline-content">
        <div class="education-header">
            <div class="education-title-row">
                <img src="{logo}" alt="{alt}" class="university-logo">
                <div class="education-text">
                    <h4>{heading}</h4>
                    <p class="university-name">{place} • {years}</p>
                </div>
            </div>
            <div class="education-badge">
                <span class="education-label">{badge}</span>
            </div>
        </div>
    </div>
</div>"#
    )
}

pub fn education_item(edu: &EducationEntry) -> String {
    timeline_item(
        &edu.logo,
        &edu.university,
        &edu.degree,
        &edu.university,
        &edu.years,
        &edu.badge,
    )
}

pub fn experience_item(exp: &ExperienceEntry) -> String {
    timeline_item(
        &exp.logo,
        &exp.organization,
        &exp.position,
        &exp.organization,
        &exp.years,
        &exp.badge,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

pub fn skill_category(category: &str, skills: &[String]) -> String {
    let tags: String = skills
        .iter()
        .map(|skill| format!(r#"<span class="tech-tag">{skill}</span>"#))
        .collect();
    format!(
        r#"
<div class="tech-category">
    <h4>{category}</h4>
    <div class="tech-tags">{tags}</div>
</div>"#
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Publications & projects
// ────────────────────────────────────────────────────────────────────────────

/// A publication entry. The slide-in class alternates with list position;
/// pagination later hides or re-reveals items in place.
pub fn publication_item(publication: &PublicationEntry, index: usize) -> String {
    let anim = if index % 2 == 0 {
        "animate-slide-left"
    } else {
        "animate-slide-right"
    };
    let tags: String = publication
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{tag}</span>"#))
        .collect();

    format!(
        r#"
<div class="publication-item {anim}" data-year="{year}">
    <div class="pub-year-badge">{year}</div>
    <div class="pub-content">
        <h3 class="pub-title">{title}</h3>
        <div class="pub-journal">{journal} • {date}</div>
        <div class="pub-tags">{tags}</div>
    </div>
    <div class="pub-actions">
        <a href="{external}" class="pub-link"><i class="fas fa-external-link-alt"></i></a>
        <a href="{pdf}" class="pub-link"><i class="fas fa-file-pdf"></i></a>
    </div>
</div>"#,
        year = publication.year,
        title = publication.title,
        journal = publication.journal,
        date = publication.date,
        external = publication.links.external,
        pdf = publication.links.pdf,
    )
}

/// Previous/next controls with the page counter.
pub fn pagination_controls(view: &PageView) -> String {
    let disabled = |flag: bool| if flag { " disabled" } else { "" };
    format!(
        r#"
<button class="pagination-btn" id="prev-btn"{prev}><i class="fas fa-chevron-left"></i> Previous</button>
<div class="page-info">Page <span id="current-page">{current}</span> of <span id="total-pages">{total}</span></div>
<button class="pagination-btn" id="next-btn"{next}>Next <i class="fas fa-chevron-right"></i></button>"#,
        prev = disabled(view.prev_disabled),
        next = disabled(view.next_disabled),
        current = view.current_page,
        total = view.total_pages,
    )
}

pub fn project_item(project: &ProjectEntry) -> String {
    format!(
        r#"
<div class="portfolio-item" data-category="{category}">
    <div class="portfolio-image">
        <div class="portfolio-placeholder" style="background: {gradient};">
            <i class="fas {icon}" style="font-size: 4rem;"></i>
        </div>
        <div class="portfolio-overlay">
            <div class="portfolio-content">
                <h3 class="portfolio-title">{title}</h3>
                <p class="portfolio-description">{description}</p>
                <div class="portfolio-links">
                    <a href="{pdf}" class="portfolio-link"><i class="fas fa-file-pdf"></i></a>
                    <a href="{external}" class="portfolio-link"><i class="fas fa-external-link-alt"></i></a>
                </div>
            </div>
        </div>
    </div>
</div>"#,
        category = project.category,
        gradient = project.gradient,
        icon = project.icon,
        title = project.title,
        description = project.description,
        pdf = project.links.pdf,
        external = project.links.external,
    )
}

pub fn filter_button(tag: &str, active: bool) -> String {
    let class = if active { "filter-btn active" } else { "filter-btn" };
    format!(
        r#"<button class="{class}" data-filter="{tag}">{}</button>"#,
        filter_label(tag)
    )
}

fn filter_label(tag: &str) -> String {
    if tag == ALL {
        return "All".to_string();
    }
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Credentials
// ────────────────────────────────────────────────────────────────────────────

pub fn award_item(award: &AwardEntry) -> String {
    format!(
        r#"
<div class="award-item">
    <div class="award-icon">{}</div>
    <div class="award-content">
        <h4>{}</h4>
        <p>{}</p>
    </div>
</div>"#,
        award.icon, award.title, award.description
    )
}

pub fn language_item(lang: &LanguageEntry) -> String {
    format!(
        r#"
<div class="language-item">
    <div class="language-name">{}</div>
    <div class="language-level">
        <div class="level-bar" style="width: {}%"></div>
    </div>
    <div class="level-text">{}</div>
</div>"#,
        lang.name, lang.level, lang.description
    )
}

pub fn expertise_item(item: &ExpertiseEntry) -> String {
    format!(
        r#"
<div class="expertise-item">
    <span class="expertise-emoji">{}</span>
    <span>{}</span>
</div>"#,
        item.icon, item.text
    )
}

pub fn interest_card(interest: &ResearchInterestEntry) -> String {
    format!(
        r#"
<div class="interest-card">
    <div class="interest-icon">{}</div>
    <h3>{}</h3>
    <p>{}</p>
</div>"#,
        interest.icon, interest.title, interest.description
    )
}

pub fn membership_card(member: &MembershipEntry) -> String {
    format!(
        r#"
<div class="membership-card">
    <div class="membership-logo">{}</div>
    <h3>{}</h3>
    <div class="membership-status">{}</div>
</div>"#,
        member.logo, member.organization, member.status
    )
}

pub fn conference_card(conf: &ConferenceEntry) -> String {
    let class = if conf.is_keynote() {
        "conference-card keynote"
    } else {
        "conference-card"
    };
    let icon = if conf.icon.is_empty() {
        "fa-microphone"
    } else {
        conf.icon.as_str()
    };
    let tags: String = conf
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="conf-tag">{tag}</span>"#))
        .collect();

    format!(
        r#"
<div class="{class}">
    <div class="conference-type">
        <i class="fas {icon}"></i>
        <span>{kind}</span>
    </div>
    <div class="conference-content">
        <h3>{title}</h3>
        <div class="conference-location">{location}</div>
        <div class="conference-topic">{topic}</div>
        <div class="conference-tags">{tags}</div>
    </div>
</div>"#,
        kind = conf.kind,
        title = conf.title,
        location = conf.location,
        topic = conf.topic,
    )
}

pub fn teaching_card(teach: &TeachingEntry) -> String {
    let mut extras = String::new();

    if !teach.stats.is_empty() {
        let stats: String = teach
            .stats
            .iter()
            .map(|stat| {
                format!(
                    r#"<div class="stat-item"><span class="stat-num">{}</span><span class="stat-label">{}</span></div>"#,
                    stat.number, stat.label
                )
            })
            .collect();
        extras.push_str(&format!(r#"<div class="teaching-stats">{stats}</div>"#));
    }
    if !teach.topics.is_empty() {
        let topics: String = teach
            .topics
            .iter()
            .map(|topic| format!(r#"<span class="topic-tag">{topic}</span>"#))
            .collect();
        extras.push_str(&format!(r#"<div class="teaching-topics">{topics}</div>"#));
    }
    if !teach.areas.is_empty() {
        let areas: String = teach
            .areas
            .iter()
            .map(|area| {
                format!(
                    r#"<div class="area-item"><i class="fas {}"></i><span>{}</span></div>"#,
                    area.icon, area.label
                )
            })
            .collect();
        extras.push_str(&format!(r#"<div class="teaching-areas">{areas}</div>"#));
    }

    format!(
        r#"
<div class="teaching-card">
    <div class="teaching-icon">
        <i class="fas {icon}"></i>
    </div>
    <div class="teaching-content">
        <h3>{title}</h3>
        <p class="teaching-description">{description}</p>
        {extras}
    </div>
</div>"#,
        icon = teach.icon,
        title = teach.title,
        description = teach.description,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Page chrome
// ────────────────────────────────────────────────────────────────────────────

pub fn social_link(network: &str, url: &str) -> String {
    let icon = match network {
        "linkedin" => "fab fa-linkedin-in",
        "google-scholar" => "fas fa-graduation-cap",
        "researchgate" => "fab fa-researchgate",
        "github" => "fab fa-github",
        "twitter" => "fab fa-twitter",
        _ => "fas fa-link",
    };
    format!(
        r#"<a href="{url}" class="social-link" data-network="{network}" target="_blank" rel="noopener"><i class="{icon}"></i></a>"#
    )
}

/// `:root` custom properties for the color scheme; empty when neither
/// color is set.
pub fn color_style(colors: &ColorScheme) -> String {
    let mut vars = String::new();
    if !colors.primary.trim().is_empty() {
        vars.push_str(&format!(" --primary: {};", colors.primary));
    }
    if !colors.secondary.trim().is_empty() {
        vars.push_str(&format!(" --secondary: {};", colors.secondary));
    }
    if vars.is_empty() {
        return String::new();
    }
    format!("<style id=\"portfolio-colors\">:root {{{vars} }}</style>\n")
}

fn active_class(open: bool) -> &'static str {
    if open {
        " active"
    } else {
        ""
    }
}

pub fn document_modal(modal: &Modal<String>) -> String {
    let src = modal.content().map(String::as_str).unwrap_or("");
    format!(
        r#"
<div class="cv-modal{active}" id="cvModal">
    <div class="cv-modal-content">
        <button class="cv-modal-close" id="closeCvModal">&times;</button>
        <iframe id="cvFrame" class="cv-frame" src="{src}" title="Curriculum Vitae"></iframe>
    </div>
</div>"#,
        active = active_class(modal.is_open()),
    )
}

pub fn image_modal(modal: &Modal<String>) -> String {
    let src = modal.content().map(String::as_str).unwrap_or("");
    format!(
        r#"
<div class="image-modal{active}" id="imageModal">
    <span class="modal-close">&times;</span>
    <img class="modal-content" id="modalImage" src="{src}" alt="Profile photo">
</div>"#,
        active = active_class(modal.is_open()),
    )
}

pub fn gallery_modal(modal: &Modal<GalleryContent>) -> String {
    let (title, body) = match modal.content() {
        Some(content) if content.images.is_empty() => (
            content.title.as_str(),
            format!(r#"<div class="gallery-placeholder-text">{GALLERY_PLACEHOLDER}</div>"#),
        ),
        Some(content) => (
            content.title.as_str(),
            content
                .images
                .iter()
                .map(|img| {
                    format!(
                        r#"<img src="{src}" alt="{caption}" title="{caption}" class="gallery-modal-image">"#,
                        src = img.src,
                        caption = img.caption,
                    )
                })
                .collect::<String>(),
        ),
        None => ("", String::new()),
    };
    format!(
        r#"
<div class="gallery-modal{active}" id="galleryModal">
    <div class="gallery-modal-content">
        <div class="gallery-modal-header">
            <h3 id="galleryModalTitle">{title}</h3>
            <button class="gallery-modal-close" id="closeGalleryModal">&times;</button>
        </div>
        <div class="gallery-modal-body" id="galleryModalBody">{body}</div>
    </div>
</div>"#,
        active = active_class(modal.is_open()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::pagination::Paginator;
    use crate::models::sections::{GalleryImage, LinkPair, Scalar, TeachingArea, TeachingStat};

    #[test]
    fn test_education_fragment_shape() {
        let html = education_item(&EducationEntry {
            degree: "Ph.D. Biological & Agricultural Engineering".to_string(),
            university: "Texas A&M University".to_string(),
            years: "2020-2024".to_string(),
            logo: "A&M.png".to_string(),
            badge: "Ph.D.".to_string(),
        });
        assert!(html.contains(r#"<div class="timeline-item">"#));
        assert!(html.contains(r#"<img src="A&M.png" alt="Texas A&M University" class="university-logo">"#));
        assert!(html.contains("<h4>Ph.D. Biological & Agricultural Engineering</h4>"));
        assert!(html.contains("Texas A&M University • 2020-2024"));
        assert!(html.contains(r#"<span class="education-label">Ph.D.</span>"#));
    }

    #[test]
    fn test_experience_uses_position_and_organization() {
        let html = experience_item(&ExperienceEntry {
            position: "Postdoctoral Associate".to_string(),
            organization: "University of Florida".to_string(),
            years: "2024-Present".to_string(),
            logo: "UF.png".to_string(),
            badge: "Current".to_string(),
        });
        assert!(html.contains("<h4>Postdoctoral Associate</h4>"));
        assert!(html.contains("University of Florida • 2024-Present"));
    }

    #[test]
    fn test_skill_category_tags_in_order() {
        let skills = vec!["Python".to_string(), "MATLAB".to_string(), "R".to_string()];
        let html = skill_category("Programming", &skills);
        assert!(html.contains(
            r#"<span class="tech-tag">Python</span><span class="tech-tag">MATLAB</span><span class="tech-tag">R</span>"#
        ));
    }

    #[test]
    fn test_publication_without_tags_renders_empty_tag_list() {
        let publication = PublicationEntry {
            year: Scalar::Int(2020),
            title: "Performance analysis of a gear-driven rotary dibbler".to_string(),
            journal: "MDPI".to_string(),
            date: "December 2020".to_string(),
            ..Default::default()
        };
        let html = publication_item(&publication, 0);
        assert!(html.contains(r#"<div class="pub-tags"></div>"#));
        assert!(html.contains(r#"<div class="publication-item animate-slide-left" data-year="2020">"#));
        assert!(html.contains("MDPI • December 2020"));
        assert!(html.contains(r#"<a href="" class="pub-link">"#));
    }

    #[test]
    fn test_publication_slide_alternates_with_index() {
        let html = publication_item(&PublicationEntry::default(), 3);
        assert!(html.contains("publication-item animate-slide-right"));
    }

    #[test]
    fn test_pagination_controls_disable_state() {
        let mut pager = Paginator::new(14, 6);
        let first = pagination_controls(&pager.show_page(1));
        assert!(first.contains(r#"id="prev-btn" disabled>"#));
        assert!(first.contains(r#"id="next-btn">"#));
        assert!(first.contains(r#"<span id="total-pages">3</span>"#));

        let last = pagination_controls(&pager.show_page(3));
        assert!(last.contains(r#"id="prev-btn">"#));
        assert!(last.contains(r#"id="next-btn" disabled>"#));
        assert!(last.contains(r#"<span id="current-page">3</span>"#));
    }

    #[test]
    fn test_project_fragment_shape() {
        let project = ProjectEntry {
            title: "Smart Greenhouse Systems".to_string(),
            description: "IoT-based monitoring".to_string(),
            category: "climate".to_string(),
            gradient: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)".to_string(),
            icon: "fa-warehouse".to_string(),
            links: LinkPair {
                pdf: "greenhouse.pdf".to_string(),
                external: "#".to_string(),
            },
        };
        let html = project_item(&project);
        assert!(html.contains(r#"<div class="portfolio-item" data-category="climate">"#));
        assert!(html.contains(r#"style="background: linear-gradient(135deg, #4facfe 0%, #00f2fe 100%);""#));
        assert!(html.contains(r#"<i class="fas fa-warehouse""#));
        assert!(html.contains(r#"<a href="greenhouse.pdf" class="portfolio-link">"#));
    }

    #[test]
    fn test_filter_button_labels() {
        assert_eq!(
            filter_button("all", true),
            r#"<button class="filter-btn active" data-filter="all">All</button>"#
        );
        assert_eq!(
            filter_button("climate", false),
            r#"<button class="filter-btn" data-filter="climate">Climate</button>"#
        );
    }

    #[test]
    fn test_conference_keynote_is_case_insensitive() {
        let conf = ConferenceEntry {
            kind: "Keynote".to_string(),
            tags: vec!["Cotton Industry".to_string()],
            ..Default::default()
        };
        let html = conference_card(&conf);
        assert!(html.contains(r#"<div class="conference-card keynote">"#));
        assert!(html.contains(r#"<i class="fas fa-microphone"></i>"#));
        assert!(html.contains(r#"<span class="conf-tag">Cotton Industry</span>"#));

        let workshop = conference_card(&ConferenceEntry {
            kind: "Workshop".to_string(),
            icon: "fa-users".to_string(),
            ..Default::default()
        });
        assert!(workshop.contains(r#"<div class="conference-card">"#));
        assert!(workshop.contains("fa-users"));
    }

    #[test]
    fn test_teaching_card_optional_blocks() {
        let bare = teaching_card(&TeachingEntry {
            icon: "fa-laptop-code".to_string(),
            title: "Workshop Facilitation".to_string(),
            ..Default::default()
        });
        assert!(!bare.contains("teaching-stats"));
        assert!(!bare.contains("teaching-topics"));
        assert!(!bare.contains("teaching-areas"));

        let full = teaching_card(&TeachingEntry {
            stats: vec![TeachingStat {
                number: "8+".into(),
                label: "Students Mentored".to_string(),
            }],
            topics: vec!["IoT Systems".to_string()],
            areas: vec![TeachingArea {
                icon: "fa-robot".to_string(),
                label: "Agricultural Robotics".to_string(),
            }],
            ..Default::default()
        });
        assert!(full.contains(
            r#"<span class="stat-num">8+</span><span class="stat-label">Students Mentored</span>"#
        ));
        assert!(full.contains(r#"<span class="topic-tag">IoT Systems</span>"#));
        assert!(full.contains(r#"<i class="fas fa-robot"></i><span>Agricultural Robotics</span>"#));
    }

    #[test]
    fn test_language_level_bar_width() {
        let html = language_item(&LanguageEntry {
            name: "Korean".to_string(),
            level: Scalar::Int(70),
            description: "Intermediate".to_string(),
        });
        assert!(html.contains(r#"style="width: 70%""#));
    }

    #[test]
    fn test_color_style() {
        let style = color_style(&ColorScheme {
            primary: "#00d4aa".to_string(),
            secondary: "#6c5ce7".to_string(),
        });
        assert_eq!(
            style,
            "<style id=\"portfolio-colors\">:root { --primary: #00d4aa; --secondary: #6c5ce7; }</style>\n"
        );
        assert_eq!(color_style(&ColorScheme::default()), "");
    }

    #[test]
    fn test_closed_modals_have_no_source() {
        let doc = document_modal(&Modal::Closed);
        assert!(doc.contains(r#"<div class="cv-modal" id="cvModal">"#));
        assert!(doc.contains(r#"id="cvFrame" class="cv-frame" src="""#));

        let img = image_modal(&Modal::Open("zafar4.png".to_string()));
        assert!(img.contains(r#"<div class="image-modal active" id="imageModal">"#));
        assert!(img.contains(r#"src="zafar4.png""#));
    }

    #[test]
    fn test_gallery_modal_placeholder_and_images() {
        let empty = gallery_modal(&Modal::Open(GalleryContent {
            title: "Awards".to_string(),
            images: vec![],
        }));
        assert!(empty.contains("Images coming soon..."));

        let full = gallery_modal(&Modal::Open(GalleryContent {
            title: "Lab".to_string(),
            images: vec![GalleryImage {
                src: "zafar4.png".to_string(),
                caption: "Equipment testing".to_string(),
            }],
        }));
        assert!(full.contains(r#"<h3 id="galleryModalTitle">Lab</h3>"#));
        assert!(full.contains(
            r#"<img src="zafar4.png" alt="Equipment testing" title="Equipment testing" class="gallery-modal-image">"#
        ));
    }

    #[test]
    fn test_social_link_icon() {
        let html = social_link("researchgate", "https://www.researchgate.net/profile/x");
        assert!(html.contains(r#"class="social-link" data-network="researchgate""#));
        assert!(html.contains("fab fa-researchgate"));
    }
}
