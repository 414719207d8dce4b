use crate::models::Course;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Seed catalog compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("../../data/courses.json");

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate course id: {0}")]
    DuplicateId(String),

    #[error("Invalid course {id}: {errors}")]
    InvalidCourse {
        id: String,
        errors: validator::ValidationErrors,
    },
}

/// Read access to a course catalog
///
/// The matching engine depends only on these operations, never on how the
/// courses were loaded.
pub trait CourseCatalog {
    /// Every course, in insertion order
    fn all(&self) -> &[Course];

    /// Exact-match lookup by identifier
    fn get_by_id(&self, id: &str) -> Option<&Course>;

    /// Courses whose title, description, category or tags contain any topic
    ///
    /// Case-insensitive substring match; insertion order is kept. An empty
    /// topic list returns the whole catalog.
    fn search(&self, topics: &[String]) -> Vec<&Course> {
        if topics.is_empty() {
            return self.all().iter().collect();
        }

        let lower_topics: Vec<String> = topics.iter().map(|t| t.to_lowercase()).collect();

        self.all()
            .iter()
            .filter(|course| {
                let text = course.search_text();
                lower_topics.iter().any(|topic| text.contains(topic.as_str()))
            })
            .collect()
    }
}

/// Immutable in-memory catalog
///
/// Constructed once at startup and shared read-only across requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Create a catalog, rejecting invalid courses and duplicate ids
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(courses.len());

        for (position, course) in courses.iter().enumerate() {
            course.validate().map_err(|errors| CatalogError::InvalidCourse {
                id: course.id.clone(),
                errors,
            })?;

            if index.insert(course.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
        }

        Ok(Self { courses, index })
    }

    /// Parse a catalog from a JSON array of courses
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Self::new(courses)
    }

    /// Load a catalog from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} courses from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// The seed catalog shipped with the service
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUILTIN_CATALOG)?;
        tracing::info!("Loaded {} built-in courses", catalog.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl CourseCatalog for InMemoryCatalog {
    fn all(&self) -> &[Course] {
        &self.courses
    }

    fn get_by_id(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&position| &self.courses[position])
    }
}
