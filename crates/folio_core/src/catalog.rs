//! Built-in sample portfolio.
//!
//! One catalog feeds both the seed job and the static data source, so the two
//! can never drift apart.

use crate::model::project::{NewProject, Project, ProjectId};

/// Timestamp reported by static projects (2025-01-01T00:00:00Z).
pub const SAMPLE_TIMESTAMP_MS: i64 = 1_735_689_600_000;

struct SampleProject {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    media_urls: &'static [&'static str],
}

const SAMPLE_PROJECTS: &[SampleProject] = &[
    SampleProject {
        title: "Creative Digital Art Collection",
        description: "A series of digital artworks exploring themes of nature and technology. Created using various digital tools including Photoshop, Illustrator, and 3D modeling software.",
        tags: &["Digital Art", "Creative", "Design"],
        media_urls: &[
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=800&h=600&fit=crop",
        ],
    },
    SampleProject {
        title: "Generative AI Music Visualizer",
        description: "An interactive web application that creates real-time visualizations based on music input. Built with React, Web Audio API, and Canvas.",
        tags: &["Web Development", "AI", "Interactive"],
        media_urls: &[
            "https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=800&h=600&fit=crop",
        ],
    },
    SampleProject {
        title: "Mobile App UI/UX Design",
        description: "Complete UI/UX design for a fitness tracking mobile application. Includes wireframes, prototypes, and final mockups.",
        tags: &["UI/UX", "Mobile", "Design"],
        media_urls: &[
            "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=800&h=600&fit=crop",
        ],
    },
    SampleProject {
        title: "Data Visualization Dashboard",
        description: "Interactive dashboard for analyzing and visualizing complex datasets. Built with D3.js, React, and Node.js backend.",
        tags: &["Data Science", "Web Development", "Analytics"],
        media_urls: &[
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop",
        ],
    },
    SampleProject {
        title: "3D Character Animation",
        description: "Character design and animation for a short film project. Created using Blender and Adobe After Effects.",
        tags: &["3D Animation", "Character Design", "Video"],
        media_urls: &[
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=800&h=600&fit=crop",
        ],
    },
    SampleProject {
        title: "E-commerce Platform",
        description: "Full-stack e-commerce platform with payment integration, inventory management, and admin dashboard.",
        tags: &["Full Stack", "E-commerce", "Web Development"],
        media_urls: &[
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=600&fit=crop",
        ],
    },
    SampleProject {
        title: "Photography Portfolio",
        description: "Collection of landscape and portrait photography showcasing various techniques and styles.",
        tags: &["Photography", "Creative", "Art"],
        media_urls: &[
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800&h=600&fit=crop",
        ],
    },
    SampleProject {
        title: "Machine Learning Model",
        description: "Image classification model trained on custom dataset using TensorFlow and Python. Achieved 95% accuracy.",
        tags: &["Machine Learning", "AI", "Python"],
        media_urls: &[
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=600&fit=crop",
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=600&fit=crop",
        ],
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Number of projects in the sample catalog.
pub fn sample_len() -> usize {
    SAMPLE_PROJECTS.len()
}

/// Returns the catalog as insertable drafts, all public.
pub fn sample_drafts() -> Vec<NewProject> {
    SAMPLE_PROJECTS
        .iter()
        .map(|sample| NewProject {
            title: sample.title.to_string(),
            description: Some(sample.description.to_string()),
            tags: Some(owned(sample.tags)),
            media_urls: Some(owned(sample.media_urls)),
            is_public: true,
        })
        .collect()
}

/// Returns the catalog as materialized projects with ids `1..=n`.
pub fn sample_projects() -> Vec<Project> {
    sample_drafts()
        .into_iter()
        .zip(1..)
        .map(|(draft, id): (NewProject, ProjectId)| Project {
            id,
            title: draft.title,
            description: draft.description,
            tags: draft.tags,
            media_urls: draft.media_urls,
            is_public: draft.is_public,
            created_at: SAMPLE_TIMESTAMP_MS,
            updated_at: SAMPLE_TIMESTAMP_MS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{sample_drafts, sample_len, sample_projects};
    use std::collections::HashSet;

    #[test]
    fn every_sample_draft_is_valid() {
        for draft in sample_drafts() {
            draft.validate().expect("sample drafts must validate");
        }
    }

    #[test]
    fn sample_projects_have_unique_sequential_ids() {
        let projects = sample_projects();
        assert_eq!(projects.len(), sample_len());
        let ids: HashSet<_> = projects.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), projects.len());
        assert_eq!(projects.first().map(|project| project.id), Some(1));
    }
}
