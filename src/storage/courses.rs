//! Course catalog and prerequisite queries.

use rusqlite::{params, Result};
use serde::{Deserialize, Serialize};

use super::store::PlanStore;

/// A course catalog row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "CourseID")]
    pub course_id: String,
    #[serde(rename = "Credits")]
    pub credits: f64,
}

/// A raw prerequisite relation row: `course_id` requires `prerequisite_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrereqRow {
    #[serde(rename = "CourseID")]
    pub course_id: String,
    #[serde(rename = "PrerequisiteID")]
    pub prerequisite_id: String,
}

/// A prerequisite relation joined with the prerequisite's credit value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrereqWithCredits {
    #[serde(rename = "CourseID")]
    pub course_id: String,
    #[serde(rename = "PrerequisiteID")]
    pub prerequisite_id: String,
    #[serde(rename = "PrerequisiteCredits")]
    pub prerequisite_credits: f64,
}

impl PlanStore {
    /// List the full course catalog.
    pub fn list_courses(&self) -> Result<Vec<Course>> {
        let mut stmt = self
            .conn
            .prepare("SELECT CourseID, Credits FROM Course_Catalog")?;
        let rows = stmt.query_map([], |row| {
            Ok(Course {
                course_id: row.get(0)?,
                credits: row.get(1)?,
            })
        })?;
        rows.collect()
    }

    /// Add a course to the catalog.
    pub fn insert_course(&self, course_id: &str, credits: f64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO Course_Catalog (CourseID, Credits) VALUES (?1, ?2)",
            params![course_id, credits],
        )?;
        Ok(())
    }

    /// Record that `course_id` requires `prerequisite_id`.
    pub fn insert_prerequisite(&self, course_id: &str, prerequisite_id: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO Prerequisite (CourseID, PrerequisiteID) VALUES (?1, ?2)",
            params![course_id, prerequisite_id],
        )?;
        Ok(())
    }

    /// Case-insensitive substring search over course IDs, capped at 50 results.
    pub fn search_courses(&self, term: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT CourseID FROM Course_Catalog WHERE LOWER(CourseID) LIKE ?1 LIMIT 50",
        )?;
        let pattern = format!("%{}%", term.to_lowercase());
        let rows = stmt.query_map(params![pattern], |row| row.get(0))?;
        rows.collect()
    }

    /// Direct prerequisites of a course joined with their credit values.
    pub fn prerequisites_with_credits(&self, course_id: &str) -> Result<Vec<PrereqWithCredits>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.CourseID, p.PrerequisiteID, c.Credits
             FROM Prerequisite p
             JOIN Course_Catalog c ON p.PrerequisiteID = c.CourseID
             WHERE p.CourseID = ?1",
        )?;
        let rows = stmt.query_map(params![course_id], |row| {
            Ok(PrereqWithCredits {
                course_id: row.get(0)?,
                prerequisite_id: row.get(1)?,
                prerequisite_credits: row.get(2)?,
            })
        })?;
        rows.collect()
    }

    /// Direct prerequisite rows of a course.
    ///
    /// Returns an empty vec both for a course with no recorded prerequisites
    /// and for an unknown course ID.
    pub fn direct_prerequisites(&self, course_id: &str) -> Result<Vec<PrereqRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT CourseID, PrerequisiteID FROM Prerequisite WHERE CourseID = ?1")?;
        let rows = stmt.query_map(params![course_id], |row| {
            Ok(PrereqRow {
                course_id: row.get(0)?,
                prerequisite_id: row.get(1)?,
            })
        })?;
        rows.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn test_store() -> (TempDir, PlanStore) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("planner.db");
        PlanStore::bootstrap(&path).unwrap();
        let store = PlanStore::open(&path).unwrap();
        (dir, store)
    }

    #[test]
    fn test_list_courses() {
        let (_dir, store) = test_store();
        store.insert_course("CS101", 3.0).unwrap();
        store.insert_course("MATH241", 4.0).unwrap();

        let courses = store.list_courses().unwrap();
        assert_eq!(courses.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let (_dir, store) = test_store();
        store.insert_course("CS101", 3.0).unwrap();
        store.insert_course("cs150", 3.0).unwrap();
        store.insert_course("MATH241", 4.0).unwrap();

        let hits = store.search_courses("cs1").unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(&"CS101".to_string()));
        assert!(hits.contains(&"cs150".to_string()));
        assert!(!hits.contains(&"MATH241".to_string()));
    }

    #[test]
    fn test_search_is_capped_at_50() {
        let (_dir, store) = test_store();
        for i in 0..60 {
            store.insert_course(&format!("CS1{:02}", i), 3.0).unwrap();
        }

        let hits = store.search_courses("cs1").unwrap();
        assert_eq!(hits.len(), 50);
    }

    #[test]
    fn test_prerequisites_with_credits_join() {
        let (_dir, store) = test_store();
        store.insert_course("CS225", 4.0).unwrap();
        store.insert_course("CS128", 3.0).unwrap();
        store.insert_prerequisite("CS225", "CS128").unwrap();

        let prereqs = store.prerequisites_with_credits("CS225").unwrap();
        assert_eq!(prereqs.len(), 1);
        assert_eq!(prereqs[0].prerequisite_id, "CS128");
        assert_eq!(prereqs[0].prerequisite_credits, 3.0);
    }

    #[test]
    fn test_direct_prerequisites_of_unknown_course_is_empty() {
        let (_dir, store) = test_store();
        assert!(store.direct_prerequisites("NOPE100").unwrap().is_empty());
    }

    #[test]
    fn test_prerequisite_requires_catalog_rows() {
        let (_dir, store) = test_store();
        store.insert_course("CS225", 4.0).unwrap();
        // Unknown prerequisite course violates the foreign key
        assert!(store.insert_prerequisite("CS225", "CS128").is_err());
    }
}
