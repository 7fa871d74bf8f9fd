use super::*;
use crate::construction::InsertionMode;
use crate::helpers::models::*;
use crate::utils::Float;

#[test]
fn can_insert_into_empty_tour_as_first() {
    let mut tour = Tour::default();

    let result = evaluate_cheapest(&tour, &Point::new(0., 0.));
    tour.cheapest_insertion(Point::new(0., 0.));

    assert_eq!(result, InsertionCost { position: InsertionPosition::First, cost: 0. });
    assert_eq!(get_coordinates(&tour), vec![(0, 0)]);
    assert_eq!(tour.total_length(), 0.);
}

#[test]
fn can_delegate_to_nearest_for_single_point_tour() {
    let mut tour = create_tour(&[(0, 0)]);

    let result = evaluate_cheapest(&tour, &Point::new(3., 4.));
    tour.cheapest_insertion(Point::new(3., 4.));

    assert_eq!(result.position, InsertionPosition::After(Point::new(0., 0.)));
    assert_approx_eq!(result.cost, 10.);
    assert_eq!(get_coordinates(&tour), vec![(0, 0), (3, 4)]);
    assert_approx_eq!(tour.total_length(), 10.);
}

#[test]
fn can_insert_inside_leg_of_two_point_tour() {
    let mut tour = create_tour_with_mode(&[(0, 0), (10, 0)], InsertionMode::Nearest);
    assert_eq!(tour.total_length(), 20.);

    let result = evaluate_cheapest(&tour, &Point::new(5., 5.));
    tour.cheapest_insertion(Point::new(5., 5.));

    assert_eq!(result.position, InsertionPosition::After(Point::new(0., 0.)));
    assert_approx_eq!(result.cost, 10. + 50_f64.sqrt() * 2.);
    assert_eq!(get_coordinates(&tour), vec![(0, 0), (5, 5), (10, 0)]);
    assert_approx_eq!(tour.total_length(), 10. + 50_f64.sqrt() * 2.);
}

parameterized_test! {can_choose_position_in_two_point_tour, (point, expected_position, expected_cost, expected_tour), {
    can_choose_position_in_two_point_tour_impl(point, expected_position, expected_cost, expected_tour);
}}

can_choose_position_in_two_point_tour! {
    case01_before_reference: ((-1, 0), None, 21., vec![(-1, 0), (0, 0), (10, 0)]),
    case02_after_last: ((11, 0), Some((10, 0)), 21., vec![(0, 0), (10, 0), (11, 0)]),
    case03_tie_before_reference_wins: ((5, 100), None, 20. + 10025_f64.sqrt(), vec![(5, 100), (0, 0), (10, 0)]),
    case04_on_leg: ((5, 0), Some((0, 0)), 20., vec![(0, 0), (5, 0), (10, 0)]),
}

fn can_choose_position_in_two_point_tour_impl(
    point: (i32, i32),
    expected_position: Option<(i32, i32)>,
    expected_cost: Float,
    expected_tour: Vec<(i32, i32)>,
) {
    let mut tour = create_tour(&[(0, 0), (10, 0)]);
    let expected_position =
        expected_position.map_or(InsertionPosition::First, |anchor| InsertionPosition::After(Point::from(anchor)));

    let result = evaluate_cheapest(&tour, &Point::from(point));
    tour.cheapest_insertion(Point::from(point));

    assert_eq!(result.position, expected_position);
    assert_approx_eq!(result.cost, expected_cost);
    assert_eq!(get_coordinates(&tour), expected_tour);
}

#[test]
fn can_insert_into_closing_leg() {
    // NOTE traversal is (10, 0) -> (10, 10) -> (0, 10) -> (0, 0), closing leg is (0, 0) -> (10, 0)
    let mut tour = create_tour(&[(10, 0), (10, 10), (0, 10), (0, 0)]);
    let point = Point::new(5., 1.);

    let result = evaluate_cheapest(&tour, &point);
    tour.cheapest_insertion(point);

    assert_eq!(result.position, InsertionPosition::After(Point::new(0., 0.)));
    assert_approx_eq!(result.cost, 30. + 26_f64.sqrt() * 2.);
    assert_eq!(get_coordinates(&tour), vec![(10, 0), (10, 10), (0, 10), (0, 0), (5, 1)]);
    assert_approx_eq!(tour.total_length(), 30. + 26_f64.sqrt() * 2.);
}

#[test]
fn can_get_shorter_tour_than_nearest_for_the_same_step() {
    let original = create_tour(&[(10, 0), (10, 10), (0, 10), (0, 0)]);
    let point = Point::new(5., 1.);

    let mut cheapest = original.clone();
    cheapest.cheapest_insertion(point);
    let mut nearest = original.clone();
    nearest.nearest_insertion(point);

    assert_eq!(get_coordinates(&nearest), vec![(10, 0), (5, 1), (10, 10), (0, 10), (0, 0)]);
    assert!(cheapest.total_length() < nearest.total_length());
}
