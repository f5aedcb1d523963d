//! Company page
//!
//! Static content only.

use super::home::Hero;
use serde::{Deserialize, Serialize};

/// Company history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Year label
    pub year: String,
    /// Heading
    pub title: String,
    /// What happened
    pub description: String,
}

/// Company value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyValue {
    /// Heading
    pub title: String,
    /// Explanation
    pub description: String,
}

/// Team member card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Full name
    pub name: String,
    /// Job title
    pub role: String,
    /// Portrait reference
    pub image: String,
    /// Short biography
    pub bio: String,
}

/// Company page model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutPage {
    /// Banner
    pub hero: Hero,
    /// History, oldest first
    pub timeline: Vec<Milestone>,
    /// Values
    pub values: Vec<CompanyValue>,
    /// Team
    pub team: Vec<TeamMember>,
}

impl AboutPage {
    /// The company page
    #[must_use]
    pub fn build() -> Self {
        Self {
            hero: Hero {
                title: "Our Story".to_string(),
                subtitle: "Transforming devices into works of art since 2020".to_string(),
                call_to_action: None,
            },
            timeline: vec![
                milestone(
                    "2020",
                    "The Beginning",
                    "MobiiWrap was founded with a vision to revolutionize mobile device customization.",
                ),
                milestone(
                    "2021",
                    "Rapid Growth",
                    "Expanded our product line to cover more devices and introduced premium materials.",
                ),
                milestone(
                    "2022",
                    "Innovation Award",
                    "Received industry recognition for our innovative design patterns and materials.",
                ),
                milestone(
                    "2023",
                    "Global Expansion",
                    "Started shipping worldwide and established partnerships with major retailers.",
                ),
            ],
            values: vec![
                value("Quality First", "We use only premium materials for lasting protection and style."),
                value("Customer Focus", "Your satisfaction is our top priority in everything we do."),
                value("Innovation", "Constantly pushing boundaries in design and technology."),
                value("Reliability", "Fast shipping and responsive customer support."),
            ],
            team: vec![
                member(
                    "Sarah Johnson",
                    "Founder & CEO",
                    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80",
                    "Visionary leader with 15+ years in tech accessories.",
                ),
                member(
                    "Michael Chen",
                    "Head of Design",
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80",
                    "Award-winning designer passionate about user experience.",
                ),
                member(
                    "Emily Rodriguez",
                    "Product Manager",
                    "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?auto=format&fit=crop&q=80",
                    "Expert in product development and market trends.",
                ),
            ],
        }
    }
}

fn milestone(year: &str, title: &str, description: &str) -> Milestone {
    Milestone {
        year: year.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn value(title: &str, description: &str) -> CompanyValue {
    CompanyValue {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn member(name: &str, role: &str, image: &str, bio: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        image: image.to_string(),
        bio: bio.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_is_chronological() {
        let page = AboutPage::build();
        let years: Vec<&str> = page.timeline.iter().map(|m| m.year.as_str()).collect();
        assert_eq!(years, ["2020", "2021", "2022", "2023"]);
        assert_eq!(page.values.len(), 4);
        assert_eq!(page.team.len(), 3);
    }
}
