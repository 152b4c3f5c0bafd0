use chrono::NaiveDate;
use roster_core::{FixedClock, Group, Student};

const THIS_YEAR: i32 = 2024;

fn clock() -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(THIS_YEAR, 6, 1).unwrap())
}

fn student(name: &str, age: i32, skill: i64) -> Student {
    let bday = NaiveDate::from_ymd_opt(THIS_YEAR - age, 3, 15).unwrap();
    Student::new(name, "Test", "x", bday, 101, skill)
}

fn names(group: &Group) -> Vec<&str> {
    group.iter().map(Student::name).collect()
}

fn age_skill_pairs(group: &Group) -> Vec<(i32, i64)> {
    let clock = clock();
    group
        .iter()
        .map(|s| (s.full_ages_at(&clock), s.skill()))
        .collect()
}

fn assert_permutation(before: &[Student], after: &Group) {
    assert_eq!(before.len(), after.len());
    for item in before {
        let expected = before.iter().filter(|other| *other == item).count();
        let actual = after.iter().filter(|other| *other == item).count();
        assert_eq!(expected, actual, "multiplicity changed for {item}");
    }
}

#[test]
fn age_and_skill_orders_by_age_then_skill() {
    let mut group = Group::new(&[
        student("a", 20, 5),
        student("b", 18, 9),
        student("c", 20, 2),
    ]);

    group.sort_by_age_and_skill_at(&clock(), false);

    assert_eq!(age_skill_pairs(&group), vec![(18, 9), (20, 2), (20, 5)]);
}

#[test]
fn age_and_skill_reverse_flips_both_components() {
    let mut group = Group::new(&[
        student("a", 20, 5),
        student("b", 18, 9),
        student("c", 20, 2),
    ]);

    group.sort_by_age_and_skill_at(&clock(), true);

    assert_eq!(age_skill_pairs(&group), vec![(20, 5), (20, 2), (18, 9)]);
}

#[test]
fn sort_by_age_is_stable_in_both_directions() {
    let students = [
        student("old-1", 20, 1),
        student("young-1", 18, 2),
        student("old-2", 20, 3),
        student("young-2", 18, 4),
    ];

    let mut ascending = Group::new(&students);
    ascending.sort_by_age_at(&clock(), false);
    assert_eq!(names(&ascending), ["young-1", "young-2", "old-1", "old-2"]);

    let mut descending = Group::new(&students);
    descending.sort_by_age_at(&clock(), true);
    assert_eq!(names(&descending), ["old-1", "old-2", "young-1", "young-2"]);
}

#[test]
fn sort_by_skill_is_stable_in_both_directions() {
    let students = [
        student("a", 30, 7),
        student("b", 19, 3),
        student("c", 25, 7),
        student("d", 22, 3),
    ];

    let mut ascending = Group::new(&students);
    ascending.sort_by_skill(false);
    assert_eq!(names(&ascending), ["b", "d", "a", "c"]);

    let mut descending = Group::new(&students);
    descending.sort_by_skill(true);
    assert_eq!(names(&descending), ["a", "c", "b", "d"]);
}

#[test]
fn age_and_skill_keeps_input_order_for_identical_keys() {
    let students = [
        student("first", 21, 4),
        student("other", 19, 4),
        student("second", 21, 4),
    ];

    let mut group = Group::new(&students);
    group.sort_by_age_and_skill_at(&clock(), false);
    assert_eq!(names(&group), ["other", "first", "second"]);

    group.sort_by_age_and_skill_at(&clock(), true);
    assert_eq!(names(&group), ["first", "second", "other"]);
}

#[test]
fn reverse_is_exact_mirror_for_distinct_keys() {
    let students = [
        student("a", 23, 40),
        student("b", 19, 10),
        student("c", 31, 30),
        student("d", 27, 20),
    ];

    let mut forward = Group::new(&students);
    forward.sort_by_age_at(&clock(), false);
    let mut backward = Group::new(&students);
    backward.sort_by_age_at(&clock(), true);
    let mut mirrored = names(&forward);
    mirrored.reverse();
    assert_eq!(names(&backward), mirrored);

    let mut forward = Group::new(&students);
    forward.sort_by_skill(false);
    let mut backward = Group::new(&students);
    backward.sort_by_skill(true);
    let mut mirrored = names(&forward);
    mirrored.reverse();
    assert_eq!(names(&backward), mirrored);

    let mut forward = Group::new(&students);
    forward.sort_by_age_and_skill_at(&clock(), false);
    let mut backward = Group::new(&students);
    backward.sort_by_age_and_skill_at(&clock(), true);
    let mut mirrored = names(&forward);
    mirrored.reverse();
    assert_eq!(names(&backward), mirrored);
}

#[test]
fn every_sort_is_a_permutation_including_duplicates() {
    let students = vec![
        student("a", 20, 5),
        student("a", 20, 5),
        student("b", 18, 9),
        student("c", 33, 1),
        student("b", 18, 9),
    ];

    for reverse in [false, true] {
        let mut group = Group::new(&students);
        group.sort_by_age_at(&clock(), reverse);
        assert_permutation(&students, &group);

        let mut group = Group::new(&students);
        group.sort_by_skill(reverse);
        assert_permutation(&students, &group);

        let mut group = Group::new(&students);
        group.sort_by_age_and_skill_at(&clock(), reverse);
        assert_permutation(&students, &group);
    }
}

#[test]
fn wall_clock_sorts_order_by_birth_year() {
    let oldest = Student::new(
        "oldest",
        "T",
        "x",
        NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
        1,
        1,
    );
    let youngest = Student::new(
        "youngest",
        "T",
        "x",
        NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
        1,
        1,
    );
    let middle = Student::new(
        "middle",
        "T",
        "x",
        NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
        1,
        0,
    );

    let mut group = Group::new(&[oldest, youngest, middle]);
    group.sort_by_age(false);
    assert_eq!(names(&group), ["youngest", "middle", "oldest"]);

    group.sort_by_age_and_skill(true);
    assert_eq!(names(&group), ["oldest", "middle", "youngest"]);
}

#[test]
fn sorting_empty_group_is_a_no_op() {
    let mut group = Group::new(&[]);
    group.sort_by_age(false);
    group.sort_by_skill(true);
    group.sort_by_age_and_skill(false);
    assert!(group.is_empty());
}
