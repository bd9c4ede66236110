//! Display ordering for classified items.

use core::cmp::Ordering;

use crate::item::ClassifiedItem;

/// Display order: everything past its date first (however long ago), then
/// the rest; ascending by days remaining within each group.
///
/// Equal keys compare `Equal`, so pair this with a stable sort (see
/// [`sort_for_display`]) to keep input order among ties.
pub fn compare_for_display(a: &ClassifiedItem, b: &ClassifiedItem) -> Ordering {
    let a_expired = a.days_remaining <= 0;
    let b_expired = b.days_remaining <= 0;

    b_expired
        .cmp(&a_expired)
        .then_with(|| a.days_remaining.cmp(&b.days_remaining))
}

/// Stable in-place sort by [`compare_for_display`].
pub fn sort_for_display(items: &mut [ClassifiedItem]) {
    items.sort_by(compare_for_display);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::classify;
    use crate::item::InventoryItem;
    use chrono::NaiveDate;
    use larder_core::ItemId;
    use proptest::prelude::*;

    fn classified(id: i64, days: i64) -> ClassifiedItem {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        ClassifiedItem {
            item: InventoryItem::new(id, format!("item-{id}"), 1, "other", today, today).unwrap(),
            days_remaining: days,
            status: classify(days),
        }
    }

    fn id_number(c: &ClassifiedItem) -> i64 {
        match c.item.id {
            ItemId::Number(n) => n,
            ItemId::Text(_) => unreachable!("tests only use numeric ids"),
        }
    }

    fn ids(items: &[ClassifiedItem]) -> Vec<ItemId> {
        items.iter().map(|c| c.item.id.clone()).collect()
    }

    #[test]
    fn expired_partition_precedes_regardless_of_magnitude() {
        let mut items = vec![classified(1, 1), classified(2, -400), classified(3, 0)];
        sort_for_display(&mut items);
        assert_eq!(ids(&items), vec![ItemId::Number(2), ItemId::Number(3), ItemId::Number(1)]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut items = vec![
            classified(20, 2),
            classified(10, 2),
            classified(30, -1),
            classified(5, -1),
        ];
        sort_for_display(&mut items);
        assert_eq!(
            ids(&items),
            vec![
                ItemId::Number(30),
                ItemId::Number(5),
                ItemId::Number(20),
                ItemId::Number(10),
            ]
        );
    }

    proptest! {
        #[test]
        fn sorting_is_idempotent(days in prop::collection::vec(-30i64..30, 0..40)) {
            let mut items: Vec<ClassifiedItem> = days
                .iter()
                .enumerate()
                .map(|(i, d)| classified(i as i64, *d))
                .collect();
            sort_for_display(&mut items);
            let once = ids(&items);
            sort_for_display(&mut items);
            prop_assert_eq!(once, ids(&items));
        }

        #[test]
        fn sorted_output_is_ordered_and_stable(days in prop::collection::vec(-10i64..10, 0..40)) {
            let mut items: Vec<ClassifiedItem> = days
                .iter()
                .enumerate()
                .map(|(i, d)| classified(i as i64, *d))
                .collect();
            sort_for_display(&mut items);

            for pair in items.windows(2) {
                let ord = compare_for_display(&pair[0], &pair[1]);
                prop_assert!(ord != Ordering::Greater);
                if ord == Ordering::Equal {
                    // Ids were assigned in input order.
                    prop_assert!(id_number(&pair[0]) < id_number(&pair[1]));
                }
            }
        }
    }
}
