//! Academic plan and planned-course operations.

use chrono::Utc;
use rusqlite::{params, Result};
use serde::{Deserialize, Serialize};

use super::store::PlanStore;

/// An academic plan row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    #[serde(rename = "PlanID")]
    pub plan_id: i64,
    #[serde(rename = "CreationDate")]
    pub creation_date: Option<String>,
    #[serde(rename = "NetID")]
    pub netid: Option<String>,
}

/// A planned course joined with its catalog credit value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedCourse {
    #[serde(rename = "PlanID")]
    pub plan_id: i64,
    #[serde(rename = "CourseID")]
    pub course_id: String,
    #[serde(rename = "Semester")]
    pub semester: Option<String>,
    #[serde(rename = "Credits")]
    pub credits: f64,
}

impl PlanStore {
    /// Plans owned by a student, matched case-insensitively on NetID.
    pub fn plans_for_student(&self, netid: &str) -> Result<Vec<Plan>> {
        let mut stmt = self.conn.prepare(
            "SELECT PlanID, CreationDate, NetID
             FROM Academic_Plan
             WHERE NetID IS NOT NULL AND LOWER(NetID) = LOWER(?1)",
        )?;
        let rows = stmt.query_map(params![netid], |row| {
            Ok(Plan {
                plan_id: row.get(0)?,
                creation_date: row.get(1)?,
                netid: row.get(2)?,
            })
        })?;
        rows.collect()
    }

    /// Courses in a plan, with credit values taken from the catalog.
    pub fn plan_courses(&self, plan_id: i64) -> Result<Vec<PlannedCourse>> {
        let mut stmt = self.conn.prepare(
            "SELECT pc.PlanID, pc.CourseID, pc.Semester, cc.Credits
             FROM Planned_Course pc
             JOIN Course_Catalog cc ON pc.CourseID = cc.CourseID
             WHERE pc.PlanID = ?1",
        )?;
        let rows = stmt.query_map(params![plan_id], |row| {
            Ok(PlannedCourse {
                plan_id: row.get(0)?,
                course_id: row.get(1)?,
                semester: row.get(2)?,
                credits: row.get(3)?,
            })
        })?;
        rows.collect()
    }

    /// Create a plan stamped with the current UTC time.
    pub fn insert_plan(&self, plan_id: i64, netid: &str) -> Result<()> {
        let created = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.conn.execute(
            "INSERT INTO Academic_Plan (PlanID, CreationDate, NetID) VALUES (?1, ?2, ?3)",
            params![plan_id, created, netid],
        )?;
        Ok(())
    }

    /// Add a course to a plan.
    pub fn insert_planned_course(
        &self,
        plan_id: i64,
        course_id: &str,
        credits: f64,
        semester: &str,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT INTO Planned_Course (PlanID, CourseID, Credits, Semester)
             VALUES (?1, ?2, ?3, ?4)",
            params![plan_id, course_id, credits, semester],
        )?;
        Ok(())
    }

    /// Delete a plan; its planned courses cascade.
    pub fn delete_plan(&self, plan_id: i64) -> Result<usize> {
        self.conn.execute(
            "DELETE FROM Academic_Plan WHERE PlanID = ?1",
            params![plan_id],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Student;
    use tempfile::{tempdir, TempDir};

    fn test_store() -> (TempDir, PlanStore) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("planner.db");
        PlanStore::bootstrap(&path).unwrap();
        let store = PlanStore::open(&path).unwrap();
        (dir, store)
    }

    fn seed_student(store: &PlanStore, netid: &str) {
        store
            .insert_student(&Student {
                netid: netid.to_string(),
                name: "Test Student".to_string(),
                expected_graduation: None,
                major_id: None,
            })
            .unwrap();
    }

    #[test]
    fn test_insert_and_list_plans_case_insensitive() {
        let (_dir, store) = test_store();
        seed_student(&store, "ab123");
        store.insert_plan(1, "ab123").unwrap();

        let plans = store.plans_for_student("AB123").unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].plan_id, 1);
        assert!(plans[0].creation_date.is_some());
    }

    #[test]
    fn test_insert_plan_for_unknown_student_fails() {
        let (_dir, store) = test_store();
        assert!(store.insert_plan(1, "ghost").is_err());
    }

    #[test]
    fn test_plan_courses_joins_catalog_credits() {
        let (_dir, store) = test_store();
        seed_student(&store, "ab123");
        store.insert_plan(1, "ab123").unwrap();
        store.insert_course("CS101", 3.0).unwrap();
        store.insert_planned_course(1, "CS101", 3.0, "FA26").unwrap();

        let courses = store.plan_courses(1).unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].course_id, "CS101");
        assert_eq!(courses[0].credits, 3.0);
        assert_eq!(courses[0].semester.as_deref(), Some("FA26"));
    }

    #[test]
    fn test_plan_courses_empty_for_unknown_plan() {
        let (_dir, store) = test_store();
        assert!(store.plan_courses(42).unwrap().is_empty());
    }

    #[test]
    fn test_delete_plan_cascades_to_planned_courses() {
        let (_dir, store) = test_store();
        seed_student(&store, "ab123");
        store.insert_plan(1, "ab123").unwrap();
        store.insert_course("CS101", 3.0).unwrap();
        store.insert_planned_course(1, "CS101", 3.0, "FA26").unwrap();

        let deleted = store.delete_plan(1).unwrap();
        assert_eq!(deleted, 1);
        assert!(store.plans_for_student("ab123").unwrap().is_empty());

        let orphans: usize = store
            .conn
            .query_row(
                "SELECT COUNT(*) FROM Planned_Course WHERE PlanID = 1",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[test]
    fn test_duplicate_plan_id_is_rejected() {
        let (_dir, store) = test_store();
        seed_student(&store, "ab123");
        store.insert_plan(1, "ab123").unwrap();
        assert!(store.insert_plan(1, "ab123").is_err());
    }
}
