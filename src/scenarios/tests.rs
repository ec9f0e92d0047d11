use super::*;
use crate::common::Error;

fn fixture() -> Fixture {
    Fixture::new().expect("canonical dataset satisfies its invariants")
}

#[test]
fn salesmen_returns_exactly_the_two_salesmen() {
    let result = salesmen(&fixture());
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|e| e.job == "SALESMAN"));
}

#[test]
fn department_30_sorts_by_salary_descending() {
    let result = department_by_salary_desc(&fixture(), 30);
    assert_eq!(result.len(), 2);
    assert!(result[0].sal >= result[1].sal);
    let names: Vec<&str> = result.iter().map(|e| e.ename.as_str()).collect();
    assert_eq!(names, vec!["ALLEN", "WARD"]);
}

#[test]
fn chicago_employees_are_all_in_department_30() {
    let result = employees_located_in(&fixture(), "CHICAGO");
    assert!(!result.is_empty());
    assert!(result.iter().all(|e| e.dept_no == 30));
}

#[test]
fn projection_emits_every_name_and_salary() {
    let result = names_and_salaries(&fixture());
    assert_eq!(result.len(), 5);
    assert!(result.iter().all(|(ename, sal)| !ename.is_empty() && *sal > 0.0));
}

#[test]
fn equi_join_pairs_employees_with_their_departments() {
    let result = employees_with_departments(&fixture());
    // Every employee matches a department; OPERATIONS has no employees.
    assert_eq!(result.len(), 5);
    assert!(result.contains(&("ALLEN".to_string(), "SALES".to_string())));
    assert!(result.contains(&("WARD".to_string(), "SALES".to_string())));
    assert!(!result.iter().any(|(_, dname)| dname == "OPERATIONS"));
}

#[test]
fn headcounts_per_department_sum_to_the_workforce() {
    let result = headcount_by_department(&fixture());
    assert!(result.contains(&(10, 2)));
    assert!(result.contains(&(20, 1)));
    assert!(result.contains(&(30, 2)));
    let total: usize = result.iter().map(|&(_, count)| count).sum();
    assert_eq!(total, 5);
}

#[test]
fn only_the_salesmen_have_commissions() {
    let result = commissioned_by_department(&fixture());
    assert_eq!(result.len(), 2);
    assert!(result.contains(&("ALLEN".to_string(), 300.0)));
    assert!(result.contains(&("WARD".to_string(), 500.0)));
}

#[test]
fn range_join_assigns_each_employee_its_salary_grade() {
    let result = employee_grades(&fixture());
    assert_eq!(result.len(), 5);
    assert!(result.contains(&("SMITH".to_string(), 1)));
    assert!(result.contains(&("WARD".to_string(), 2)));
    assert!(result.contains(&("ALLEN".to_string(), 3)));
    assert!(result.contains(&("KING".to_string(), 5)));
    assert!(result.contains(&("FORD".to_string(), 5)));
}

#[test]
fn average_salaries_per_department_skip_employee_less_departments() {
    let result = average_salary_by_department(&fixture()).unwrap();
    assert!(result.contains(&(10, 5000.0)));
    assert!(result.contains(&(20, 800.0)));
    assert!(result.contains(&(30, 1425.0)));
    assert!(!result.iter().any(|&(dept_no, _)| dept_no == 40));
}

#[test]
fn only_allen_earns_above_his_department_average() {
    let result = earning_above_department_average(&fixture()).unwrap();
    assert_eq!(result, vec!["ALLEN".to_string()]);
}

#[test]
fn the_top_salary_is_five_thousand() {
    assert_eq!(max_salary(&fixture()).unwrap(), 5000.0);
}

#[test]
fn ward_draws_the_lowest_salary_in_department_30() {
    assert_eq!(min_salary_in_department(&fixture(), 30).unwrap(), 1250.0);
}

#[test]
fn min_salary_of_an_empty_department_is_undefined() {
    // OPERATIONS has no employees, so the aggregate has nothing to fold.
    let result = min_salary_in_department(&fixture(), 40);
    assert!(matches!(result, Err(Error::EmptyInput(_))));
}

#[test]
fn first_two_hired_come_back_in_hire_date_order() {
    let result = first_hired(&fixture(), 2);
    assert_eq!(result.len(), 2);
    assert!(result[0].hire_date <= result[1].hire_date);
    assert_eq!(result[0].ename, "SMITH");
    assert_eq!(result[1].ename, "ALLEN");
}

#[test]
fn three_distinct_jobs_in_first_occurrence_order() {
    let result = distinct_jobs(&fixture());
    assert_eq!(result, vec!["CLERK", "SALESMAN", "PRESIDENT"]);
}

#[test]
fn everyone_but_the_president_has_a_manager() {
    let result = employees_with_managers(&fixture());
    assert_eq!(result.len(), 4);
    assert!(result.iter().all(|e| e.mgr.is_some()));
    assert!(!result.iter().any(|e| e.ename == "KING" || e.job == "PRESIDENT"));
}

#[test]
fn every_employee_earns_more_than_five_hundred() {
    let fixture = fixture();
    assert!(all_earn_more_than(&fixture, 500.0));
    // SMITH earns exactly 800; the comparison is strict.
    assert!(!all_earn_more_than(&fixture, 800.0));
}

#[test]
fn someone_draws_a_commission_over_four_hundred() {
    let fixture = fixture();
    assert!(any_commission_over(&fixture, 400.0));
    assert!(!any_commission_over(&fixture, 600.0));
}

#[test]
fn self_join_resolves_managers_and_drops_dangling_references() {
    let result = employee_manager_pairs(&fixture());
    // ALLEN and WARD report to 7698, who is not in the dataset.
    assert_eq!(result.len(), 2);
    assert!(result.contains(&("SMITH".to_string(), "FORD".to_string())));
    assert!(result.contains(&("FORD".to_string(), "KING".to_string())));
    assert!(!result.iter().any(|(employee, _)| employee == "KING"));
}

#[test]
fn total_income_folds_commission_into_salary() {
    let result = total_incomes(&fixture());
    assert_eq!(result.len(), 5);
    assert!(result.contains(&("SMITH".to_string(), 800.0)));
    assert!(result.contains(&("ALLEN".to_string(), 1900.0)));
    assert!(result.contains(&("WARD".to_string(), 1750.0)));
    assert!(result.contains(&("KING".to_string(), 5000.0)));
    assert!(result.contains(&("FORD".to_string(), 5000.0)));
}

#[test]
fn three_way_join_lines_up_name_department_and_grade() {
    let result = employee_department_grades(&fixture());
    assert_eq!(result.len(), 5);
    assert!(result.contains(&("SMITH".to_string(), "RESEARCH".to_string(), 1)));
    assert!(result.contains(&("ALLEN".to_string(), "SALES".to_string(), 3)));
    assert!(result.contains(&("WARD".to_string(), "SALES".to_string(), 2)));
    assert!(result.contains(&("KING".to_string(), "ACCOUNTING".to_string(), 5)));
    assert!(result.contains(&("FORD".to_string(), "ACCOUNTING".to_string(), 5)));
}
