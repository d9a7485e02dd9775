//! Student model and account operations.

use rusqlite::{params, OptionalExtension, Result, Row};
use serde::{Deserialize, Serialize};

use super::store::PlanStore;

/// A student account row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "NetID")]
    pub netid: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Expected_Graduation")]
    pub expected_graduation: Option<String>,
    #[serde(rename = "MajorID")]
    pub major_id: Option<i64>,
}

fn student_from_row(row: &Row<'_>) -> Result<Student> {
    Ok(Student {
        netid: row.get(0)?,
        name: row.get(1)?,
        expected_graduation: row.get(2)?,
        major_id: row.get(3)?,
    })
}

const STUDENT_COLUMNS: &str = "NetID, Name, Expected_Graduation, MajorID";

impl PlanStore {
    /// List every student account.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM Student", STUDENT_COLUMNS))?;
        let rows = stmt.query_map([], student_from_row)?;
        rows.collect()
    }

    /// Look up a student by NetID.
    pub fn find_student(&self, netid: &str) -> Result<Option<Student>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM Student WHERE NetID = ?1", STUDENT_COLUMNS),
                params![netid],
                student_from_row,
            )
            .optional()
    }

    /// Exact-match credential check; returns the student row on success.
    pub fn authenticate(&self, netid: &str, name: &str) -> Result<Option<Student>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM Student WHERE NetID = ?1 AND Name = ?2",
                    STUDENT_COLUMNS
                ),
                params![netid, name],
                student_from_row,
            )
            .optional()
    }

    /// Insert a new student account.
    pub fn insert_student(&self, student: &Student) -> Result<()> {
        self.conn.execute(
            "INSERT INTO Student (NetID, Name, Expected_Graduation, MajorID)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                student.netid,
                student.name,
                student.expected_graduation,
                student.major_id,
            ],
        )?;
        Ok(())
    }

    /// Overwrite a student's mutable fields. Callers coalesce omitted fields
    /// to the currently stored values before calling.
    pub fn update_student(
        &self,
        netid: &str,
        name: &str,
        major_id: Option<i64>,
        expected_graduation: Option<&str>,
    ) -> Result<()> {
        self.conn.execute(
            "UPDATE Student
             SET Name = ?1, MajorID = ?2, Expected_Graduation = ?3
             WHERE NetID = ?4",
            params![name, major_id, expected_graduation, netid],
        )?;
        Ok(())
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

    fn sample_student() -> Student {
        Student {
            netid: "ab123".to_string(),
            name: "Ada Byron".to_string(),
            expected_graduation: Some("Spring 2027".to_string()),
            major_id: Some(4),
        }
    }

    #[test]
    fn test_insert_and_find_student() {
        let (_dir, store) = test_store();
        store.insert_student(&sample_student()).unwrap();

        let found = store.find_student("ab123").unwrap().unwrap();
        assert_eq!(found.name, "Ada Byron");
        assert_eq!(found.major_id, Some(4));

        assert!(store.find_student("zz999").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_netid_is_rejected_by_store() {
        let (_dir, store) = test_store();
        store.insert_student(&sample_student()).unwrap();
        assert!(store.insert_student(&sample_student()).is_err());
    }

    #[test]
    fn test_authenticate_requires_exact_match() {
        let (_dir, store) = test_store();
        store.insert_student(&sample_student()).unwrap();

        assert!(store.authenticate("ab123", "Ada Byron").unwrap().is_some());
        assert!(store.authenticate("ab123", "Someone Else").unwrap().is_none());
        assert!(store.authenticate("zz999", "Ada Byron").unwrap().is_none());
    }

    #[test]
    fn test_update_student_overwrites_all_fields() {
        let (_dir, store) = test_store();
        store.insert_student(&sample_student()).unwrap();

        store
            .update_student("ab123", "Ada Lovelace", Some(7), Some("Fall 2027"))
            .unwrap();

        let found = store.find_student("ab123").unwrap().unwrap();
        assert_eq!(found.name, "Ada Lovelace");
        assert_eq!(found.major_id, Some(7));
        assert_eq!(found.expected_graduation.as_deref(), Some("Fall 2027"));
    }

    #[test]
    fn test_list_students() {
        let (_dir, store) = test_store();
        assert!(store.list_students().unwrap().is_empty());

        store.insert_student(&sample_student()).unwrap();
        let mut other = sample_student();
        other.netid = "cd456".to_string();
        store.insert_student(&other).unwrap();

        assert_eq!(store.list_students().unwrap().len(), 2);
    }
}
