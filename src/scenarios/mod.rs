//! Scenario evaluators: one pure function per canonical question over the
//! EMP/DEPT/SALGRADE dataset, each composed strictly from the query
//! operators. No evaluator depends on another's result.

use crate::common::Result;
use crate::fixture::Fixture;
use crate::query::{aggregate, join, transform, Direction};
use crate::types::Employee;
use std::collections::HashMap;

#[cfg(test)]
mod tests;

/// SELECT * FROM emp WHERE job = 'SALESMAN'
pub fn salesmen(fixture: &Fixture) -> Vec<Employee> {
    transform::filter(fixture.employees(), |e| e.job == "SALESMAN").collect()
}

/// SELECT * FROM emp WHERE deptno = ? ORDER BY sal DESC
pub fn department_by_salary_desc(fixture: &Fixture, dept_no: i32) -> Vec<Employee> {
    let members = transform::filter(fixture.employees(), |e| e.dept_no == dept_no);
    transform::sort_by(members, |e| e.sal, Direction::Descending)
}

/// SELECT * FROM emp WHERE deptno IN (SELECT deptno FROM dept WHERE loc = ?)
pub fn employees_located_in(fixture: &Fixture, loc: &str) -> Vec<Employee> {
    let dept_nos: Vec<i32> = transform::project(
        transform::filter(fixture.departments(), |d| d.loc == loc),
        |d| d.dept_no,
    )
    .collect();
    transform::filter(fixture.employees(), |e| dept_nos.contains(&e.dept_no)).collect()
}

/// SELECT ename, sal FROM emp
pub fn names_and_salaries(fixture: &Fixture) -> Vec<(String, f64)> {
    transform::project(fixture.employees(), |e| (e.ename, e.sal)).collect()
}

/// SELECT e.ename, d.dname FROM emp e JOIN dept d ON e.deptno = d.deptno
pub fn employees_with_departments(fixture: &Fixture) -> Vec<(String, String)> {
    join::hash(
        fixture.employees(),
        fixture.departments(),
        |e| e.dept_no,
        |d| d.dept_no,
        |e, d| (e.ename.clone(), d.dname.clone()),
    )
}

/// SELECT deptno, COUNT(*) FROM emp GROUP BY deptno
pub fn headcount_by_department(fixture: &Fixture) -> Vec<(i32, usize)> {
    aggregate::group_by(fixture.employees(), |e| e.dept_no)
        .into_iter()
        .map(|group| (group.key, group.count()))
        .collect()
}

/// SELECT ename, comm FROM emp WHERE comm IS NOT NULL, reached by flattening
/// each department's employees (the SelectMany shape of the original).
pub fn commissioned_by_department(fixture: &Fixture) -> Vec<(String, f64)> {
    let employees = fixture.employees();
    let per_department = transform::flat_map(fixture.departments(), |dept| {
        transform::filter(employees.clone(), move |e| e.dept_no == dept.dept_no)
            .map(|e| (e.ename, e.comm))
            .collect::<Vec<_>>()
    });
    transform::filter(per_department, |(_, comm)| comm.is_some())
        .map(|(ename, comm)| (ename, comm.unwrap_or(0.0)))
        .collect()
}

/// SELECT e.ename, s.grade FROM emp e JOIN salgrade s
///   ON e.sal BETWEEN s.losal AND s.hisal
pub fn employee_grades(fixture: &Fixture) -> Vec<(String, i32)> {
    join::nested_loop(
        fixture.employees(),
        fixture.salary_grades(),
        |e, grade| grade.contains(e.sal),
        |e, grade| (e.ename.clone(), grade.grade),
    )
}

/// SELECT deptno, AVG(sal) FROM emp GROUP BY deptno, restricted to
/// departments that exist (inner join drops nothing here, but it drops
/// employee-less departments from the output).
pub fn average_salary_by_department(fixture: &Fixture) -> Result<Vec<(i32, f64)>> {
    let rows = join::hash(
        fixture.employees(),
        fixture.departments(),
        |e| e.dept_no,
        |d| d.dept_no,
        |e, _| (e.dept_no, e.sal),
    );
    let mut averages = Vec::new();
    for group in aggregate::group_by(rows, |&(dept_no, _)| dept_no) {
        let avg = group.average(|&(_, sal)| sal)?;
        averages.push((group.key, avg));
    }
    Ok(averages)
}

/// SELECT ename FROM emp e
///   WHERE e.sal > (SELECT AVG(sal) FROM emp WHERE deptno = e.deptno)
///
/// Pre-aggregates the per-department averages once instead of recomputing
/// them per employee; the comparison stays a strict greater-than against the
/// employee's own department average.
pub fn earning_above_department_average(fixture: &Fixture) -> Result<Vec<String>> {
    let employees = fixture.employees();
    let mut averages: HashMap<i32, f64> = HashMap::new();
    for group in aggregate::group_by(employees.clone(), |e| e.dept_no) {
        averages.insert(group.key, group.average(|e| e.sal)?);
    }
    Ok(
        transform::filter(employees, |e| {
            averages.get(&e.dept_no).is_some_and(|&avg| e.sal > avg)
        })
        .map(|e| e.ename)
        .collect(),
    )
}

/// SELECT MAX(sal) FROM emp
pub fn max_salary(fixture: &Fixture) -> Result<f64> {
    aggregate::max(&fixture.employees(), |e| e.sal)
}

/// SELECT MIN(sal) FROM emp WHERE deptno = ?
pub fn min_salary_in_department(fixture: &Fixture, dept_no: i32) -> Result<f64> {
    let members: Vec<Employee> =
        transform::filter(fixture.employees(), |e| e.dept_no == dept_no).collect();
    aggregate::min(&members, |e| e.sal)
}

/// The first `n` employees in canonical order, sorted by hire date ascending.
pub fn first_hired(fixture: &Fixture, n: usize) -> Vec<Employee> {
    let head = transform::take(fixture.employees(), n);
    transform::sort_by(head, |e| e.hire_date, Direction::Ascending)
}

/// SELECT DISTINCT job FROM emp, keeping first-occurrence order.
pub fn distinct_jobs(fixture: &Fixture) -> Vec<String> {
    transform::project(
        transform::distinct_by(fixture.employees(), |e| e.job.clone()),
        |e| e.job,
    )
    .collect()
}

/// SELECT * FROM emp WHERE mgr IS NOT NULL
pub fn employees_with_managers(fixture: &Fixture) -> Vec<Employee> {
    transform::filter(fixture.employees(), |e| e.mgr.is_some()).collect()
}

/// Whether every employee earns strictly more than the floor.
pub fn all_earn_more_than(fixture: &Fixture, floor: f64) -> bool {
    transform::all(fixture.employees(), |e| e.sal > floor)
}

/// Whether any employee's commission exceeds the threshold. A missing
/// commission never satisfies the comparison.
pub fn any_commission_over(fixture: &Fixture, threshold: f64) -> bool {
    transform::any(fixture.employees(), |e| {
        e.comm.is_some_and(|comm| comm > threshold)
    })
}

/// SELECT e.ename, m.ename FROM emp e JOIN emp m ON e.mgr = m.empno
///
/// A self-join on the manager reference. The root has no manager and never
/// appears on the employee side; dangling references drop out.
pub fn employee_manager_pairs(fixture: &Fixture) -> Vec<(String, String)> {
    join::nested_loop(
        fixture.employees(),
        fixture.employees(),
        |e, m| e.mgr == Some(m.emp_no),
        |e, m| (e.ename.clone(), m.ename.clone()),
    )
}

/// SELECT ename, sal + COALESCE(comm, 0) FROM emp
pub fn total_incomes(fixture: &Fixture) -> Vec<(String, f64)> {
    transform::project(fixture.employees(), |e| {
        let total = e.total_income();
        (e.ename, total)
    })
    .collect()
}

/// SELECT e.ename, d.dname, s.grade FROM emp e
///   JOIN dept d ON e.deptno = d.deptno
///   JOIN salgrade s ON e.sal BETWEEN s.losal AND s.hisal
pub fn employee_department_grades(fixture: &Fixture) -> Vec<(String, String, i32)> {
    let with_departments = join::hash(
        fixture.employees(),
        fixture.departments(),
        |e| e.dept_no,
        |d| d.dept_no,
        |e, d| (e.ename.clone(), e.sal, d.dname.clone()),
    );
    join::nested_loop(
        with_departments,
        fixture.salary_grades(),
        |&(_, sal, _), grade| grade.contains(sal),
        |(ename, _, dname), grade| (ename.clone(), dname.clone(), grade.grade),
    )
}
