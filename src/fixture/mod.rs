//! The fixture store: the canonical EMP/DEPT/SALGRADE dataset.
//!
//! The dataset is an explicit, immutable value. Evaluators take a `&Fixture`
//! rather than reaching for a hidden global, so tests stay isolated; a shared
//! lazily-built instance is available via [`Fixture::canonical`] for callers
//! that don't care about ownership.

use crate::common::{Error, Result};
use crate::errinvariant;
use crate::types::{Department, Employee, SalaryGrade};
use chrono::NaiveDate;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static CANONICAL: Lazy<Fixture> =
    Lazy::new(|| Fixture::new().expect("canonical dataset satisfies its invariants"));

/// Three fixed record collections, validated once at construction and never
/// mutated afterwards. Accessors hand out fresh copies so callers cannot
/// corrupt the canonical data.
#[derive(Clone, Debug)]
pub struct Fixture {
    employees: Vec<Employee>,
    departments: Vec<Department>,
    salary_grades: Vec<SalaryGrade>,
}

impl Fixture {
    /// Builds and validates the canonical dataset.
    pub fn new() -> Result<Self> {
        Self::from_parts(seed_employees(), seed_departments(), seed_salary_grades())
    }

    /// Builds a fixture from explicit collections, failing fast with
    /// `Error::FixtureInvariant` if they don't hold together.
    pub fn from_parts(
        employees: Vec<Employee>,
        departments: Vec<Department>,
        salary_grades: Vec<SalaryGrade>,
    ) -> Result<Self> {
        let fixture = Self { employees, departments, salary_grades };
        fixture.validate()?;
        debug!(
            "constructed fixture: {} employees, {} departments, {} salary grades",
            fixture.employees.len(),
            fixture.departments.len(),
            fixture.salary_grades.len()
        );
        Ok(fixture)
    }

    /// Returns the process-wide canonical fixture, built on first access.
    pub fn canonical() -> &'static Fixture {
        &CANONICAL
    }

    /// Returns a fresh copy of the employee collection, in canonical order.
    pub fn employees(&self) -> Vec<Employee> {
        self.employees.clone()
    }

    /// Returns a fresh copy of the department collection, in canonical order.
    pub fn departments(&self) -> Vec<Department> {
        self.departments.clone()
    }

    /// Returns a fresh copy of the salary grade collection, in band order.
    pub fn salary_grades(&self) -> Vec<SalaryGrade> {
        self.salary_grades.clone()
    }

    /// Looks up an employee by number.
    pub fn employee(&self, emp_no: i32) -> Result<Employee> {
        self.employees
            .iter()
            .find(|e| e.emp_no == emp_no)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("no employee {emp_no}")))
    }

    /// Looks up a department by number.
    pub fn department(&self, dept_no: i32) -> Result<Department> {
        self.departments
            .iter()
            .find(|d| d.dept_no == dept_no)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("no department {dept_no}")))
    }

    /// Checks the cross-collection invariants: department references resolve,
    /// at most one employee is the root of the reporting chain, and the grade
    /// bands are well-formed, non-overlapping, and cover every salary in use.
    fn validate(&self) -> Result<()> {
        let dept_nos: HashSet<i32> = self.departments.iter().map(|d| d.dept_no).collect();
        for emp in &self.employees {
            if emp.ename.is_empty() {
                return errinvariant!("employee {} has an empty name", emp.emp_no);
            }
            if !dept_nos.contains(&emp.dept_no) {
                return errinvariant!(
                    "employee {} references unknown department {}",
                    emp.emp_no,
                    emp.dept_no
                );
            }
            if emp.sal < 0.0 {
                return errinvariant!("employee {} has a negative salary", emp.emp_no);
            }
        }

        for dept in &self.departments {
            if dept.dname.is_empty() {
                return errinvariant!("department {} has an empty name", dept.dept_no);
            }
        }

        let roots = self.employees.iter().filter(|e| e.mgr.is_none()).count();
        if roots > 1 {
            return errinvariant!("{roots} employees have no manager, expected at most one");
        }

        for grade in &self.salary_grades {
            if grade.losal > grade.hisal {
                return errinvariant!(
                    "grade {} has losal {} above hisal {}",
                    grade.grade,
                    grade.losal,
                    grade.hisal
                );
            }
        }
        let mut bands: Vec<&SalaryGrade> = self.salary_grades.iter().collect();
        bands.sort_by(|a, b| a.losal.total_cmp(&b.losal));
        for pair in bands.windows(2) {
            if pair[1].losal <= pair[0].hisal {
                return errinvariant!("grades {} and {} overlap", pair[0].grade, pair[1].grade);
            }
        }
        for emp in &self.employees {
            let matches = self.salary_grades.iter().filter(|g| g.contains(emp.sal)).count();
            if matches != 1 {
                return errinvariant!(
                    "salary {} of employee {} falls in {} bands, expected exactly one",
                    emp.sal,
                    emp.emp_no,
                    matches
                );
            }
        }

        Ok(())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn emp(
    emp_no: i32,
    ename: &str,
    job: &str,
    mgr: Option<i32>,
    sal: f64,
    comm: Option<f64>,
    dept_no: i32,
    hire_date: NaiveDate,
) -> Employee {
    Employee {
        emp_no,
        ename: ename.to_string(),
        job: job.to_string(),
        mgr,
        sal,
        comm,
        dept_no,
        hire_date,
    }
}

/// The five canonical employees. ALLEN and WARD report to a manager that is
/// not part of the dataset, so the manager self-join drops them.
fn seed_employees() -> Vec<Employee> {
    vec![
        emp(7369, "SMITH", "CLERK", Some(7902), 800.0, None, 20, date(1980, 12, 17)),
        emp(7499, "ALLEN", "SALESMAN", Some(7698), 1600.0, Some(300.0), 30, date(1981, 2, 20)),
        emp(7521, "WARD", "SALESMAN", Some(7698), 1250.0, Some(500.0), 30, date(1981, 2, 22)),
        emp(7839, "KING", "PRESIDENT", None, 5000.0, None, 10, date(1981, 11, 17)),
        emp(7902, "FORD", "CLERK", Some(7839), 5000.0, None, 10, date(1981, 12, 3)),
    ]
}

/// The four canonical departments. OPERATIONS has no employees and therefore
/// never survives an inner join.
fn seed_departments() -> Vec<Department> {
    let dept = |dept_no, dname: &str, loc: &str| Department {
        dept_no,
        dname: dname.to_string(),
        loc: loc.to_string(),
    };
    vec![
        dept(10, "ACCOUNTING", "NEW YORK"),
        dept(20, "RESEARCH", "DALLAS"),
        dept(30, "SALES", "CHICAGO"),
        dept(40, "OPERATIONS", "BOSTON"),
    ]
}

/// The five canonical salary bands.
fn seed_salary_grades() -> Vec<SalaryGrade> {
    let band = |grade, losal, hisal| SalaryGrade { grade, losal, hisal };
    vec![
        band(1, 700.0, 1200.0),
        band(2, 1201.0, 1400.0),
        band(3, 1401.0, 2000.0),
        band(4, 2001.0, 3000.0),
        band(5, 3001.0, 9999.0),
    ]
}
