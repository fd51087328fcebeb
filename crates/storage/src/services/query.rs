use std::cmp::Ordering;

use crate::dto::common::PageRequest;
use crate::dto::filter::{ShipFilter, ShipOrder};
use crate::models::Ship;

type ShipComparator = fn(&Ship, &Ship) -> Ordering;

fn comparator(order: ShipOrder) -> ShipComparator {
    match order {
        ShipOrder::Id => |a, b| a.id.cmp(&b.id),
        ShipOrder::Speed => |a, b| a.speed.cmp(&b.speed),
        ShipOrder::Date => |a, b| a.prod_date.cmp(&b.prod_date),
        ShipOrder::Rating => |a, b| a.rating.cmp(&b.rating),
    }
}

fn within<T: PartialOrd>(value: &T, min: Option<&T>, max: Option<&T>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

/// Whether `ship` satisfies every criterion set on `filter`
pub fn matches(filter: &ShipFilter, ship: &Ship) -> bool {
    filter
        .name
        .as_deref()
        .is_none_or(|name| ship.name.contains(name))
        && filter
            .planet
            .as_deref()
            .is_none_or(|planet| ship.planet.contains(planet))
        && filter.ship_type.is_none_or(|ship_type| ship.ship_type == ship_type)
        && filter.is_used.is_none_or(|is_used| ship.is_used == is_used)
        && within(
            &ship.prod_date_millis(),
            filter.after.as_ref(),
            filter.before.as_ref(),
        )
        && within(
            &ship.speed,
            filter.min_speed.as_ref(),
            filter.max_speed.as_ref(),
        )
        && within(
            &ship.crew_size,
            filter.min_crew_size.as_ref(),
            filter.max_crew_size.as_ref(),
        )
        && within(
            &ship.rating,
            filter.min_rating.as_ref(),
            filter.max_rating.as_ref(),
        )
}

pub fn filter_ships(ships: Vec<Ship>, filter: &ShipFilter) -> Vec<Ship> {
    ships
        .into_iter()
        .filter(|ship| matches(filter, ship))
        .collect()
}

pub fn count_matching(ships: &[Ship], filter: &ShipFilter) -> usize {
    ships.iter().filter(|ship| matches(filter, ship)).count()
}

/// Stable ascending sort; ships with equal keys keep their relative order.
pub fn sort_ships(ships: &mut [Ship], order: ShipOrder) {
    ships.sort_by(comparator(order));
}

/// Cuts one page out of `ships`. A page starting past the end is empty.
pub fn paginate(ships: Vec<Ship>, page: PageRequest) -> Vec<Ship> {
    let range = page.range(ships.len());
    ships
        .into_iter()
        .skip(range.start)
        .take(range.len())
        .collect()
}

/// Filter, sort and paginate in one pass over a snapshot of the catalog
pub fn run_query(
    ships: Vec<Ship>,
    filter: &ShipFilter,
    order: ShipOrder,
    page: PageRequest,
) -> Vec<Ship> {
    let mut matching = filter_ships(ships, filter);
    sort_ships(&mut matching, order);
    paginate(matching, page)
}
