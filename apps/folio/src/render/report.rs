use serde::Serialize;

/// A content section of the page, keyed the way the configuration names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Education,
    Experience,
    Skills,
    Publications,
    Projects,
    Awards,
    Languages,
    Expertise,
    ResearchInterests,
    Memberships,
    Conferences,
    Teaching,
    SocialMedia,
}

/// Container each section renders into, in page order.
pub const SECTION_CONTAINERS: &[(Section, &str)] = &[
    (Section::Education, ".education-timeline"),
    (Section::Experience, ".experience-timeline"),
    (Section::Skills, ".tech-skills"),
    (Section::Publications, ".publications-list"),
    (Section::Projects, ".portfolio-grid"),
    (Section::Awards, ".awards-list"),
    (Section::Languages, ".languages-list"),
    (Section::Expertise, ".expertise-list"),
    (Section::ResearchInterests, ".interests-grid"),
    (Section::Memberships, ".memberships-grid"),
    (Section::Conferences, ".conferences-grid"),
    (Section::Teaching, ".teaching-grid"),
    (Section::SocialMedia, ".social-links"),
];

impl Section {
    /// Configuration key for the section.
    pub fn key(self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Publications => "publications",
            Section::Projects => "projects",
            Section::Awards => "awards",
            Section::Languages => "languages",
            Section::Expertise => "expertise",
            Section::ResearchInterests => "researchInterests",
            Section::Memberships => "memberships",
            Section::Conferences => "conferences",
            Section::Teaching => "teaching",
            Section::SocialMedia => "socialMedia",
        }
    }

    pub fn container(self) -> &'static str {
        SECTION_CONTAINERS
            .iter()
            .find(|(section, _)| *section == self)
            .map_or("", |(_, container)| *container)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionOutcome {
    /// The container now holds one fragment per record.
    Rendered { fragments: usize },
    /// No records; the container keeps its placeholder content.
    SkippedEmpty,
    /// Records exist but the shell has no usable container for them.
    MissingContainer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub section: Section,
    pub container: &'static str,
    pub outcome: SectionOutcome,
}

/// What a render pass did to the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderReport {
    pub config_loaded: bool,
    pub sections: Vec<SectionReport>,
    /// Page-shell slots (name, stats, photos, colors) that were filled.
    pub applied: Vec<String>,
}

impl RenderReport {
    pub fn record(&mut self, section: Section, outcome: SectionOutcome) {
        self.sections.push(SectionReport {
            section,
            container: section.container(),
            outcome,
        });
    }

    pub fn outcome(&self, section: Section) -> Option<SectionOutcome> {
        self.sections
            .iter()
            .find(|r| r.section == section)
            .map(|r| r.outcome)
    }

    /// Fragments written for `section`; zero unless it rendered.
    pub fn fragments_for(&self, section: Section) -> usize {
        match self.outcome(section) {
            Some(SectionOutcome::Rendered { fragments }) => fragments,
            _ => 0,
        }
    }

    pub fn rendered_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|r| matches!(r.outcome, SectionOutcome::Rendered { .. }))
            .count()
    }

    pub fn total_fragments(&self) -> usize {
        self.sections
            .iter()
            .map(|r| match r.outcome {
                SectionOutcome::Rendered { fragments } => fragments,
                _ => 0,
            })
            .sum()
    }

    pub fn missing_containers(&self) -> Vec<&'static str> {
        self.sections
            .iter()
            .filter(|r| r.outcome == SectionOutcome::MissingContainer)
            .map(|r| r.container)
            .collect()
    }

    pub fn skipped_sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .filter(|r| r.outcome == SectionOutcome::SkippedEmpty)
            .map(|r| r.section)
            .collect()
    }
}
