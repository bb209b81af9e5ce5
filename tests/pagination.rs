use pushkind_pager::domain::page::PageState;
use pushkind_pager::domain::types::{GroupSize, PageIndex, PageSize};
use pushkind_pager::pagination::Pager;

fn pager(page: usize, page_size: usize, total: usize, group_size: usize) -> Pager {
    let state = PageState::new(
        PageIndex::new(page).unwrap(),
        PageSize::new(page_size).unwrap(),
    );
    Pager::new(state, total, GroupSize::new(group_size).unwrap())
}

#[test]
fn range_stays_within_total_rows() {
    for total in [1usize, 9, 10, 11, 47, 120] {
        for page_size in [1, 3, 10, 25] {
            let page_count = total.div_ceil(page_size);
            for page in 1..=page_count {
                let pager = pager(page, page_size, total, 5);
                assert!(pager.range.from <= pager.range.to, "{page}/{page_size}/{total}");
                assert!(pager.range.to <= total);
            }
        }
    }
}

#[test]
fn groups_partition_the_pages() {
    for group_size in [1, 2, 5, 7] {
        let page_count = 23;
        let mut seen = Vec::new();
        let mut page = 1;

        while page <= page_count {
            let window = pager(page, 1, page_count, group_size).window;

            assert_eq!((window.group_start - 1) % group_size, 0);
            assert!(window.pages().len() <= group_size);
            assert!(window.pages().contains(&page));
            assert_eq!(window.previous_group().is_some(), window.group_start > 1);
            assert_eq!(window.next_group().is_some(), window.group_end <= page_count);

            seen.extend(window.pages());
            page = window.group_end;
        }

        assert_eq!(seen, (1..=page_count).collect::<Vec<_>>());
    }
}

#[test]
fn every_page_of_a_group_shares_the_window() {
    let windows: Vec<_> = (6..=10)
        .map(|page| pager(page, 10, 120, 5).window.pages())
        .collect();

    assert!(windows.iter().all(|pages| *pages == (6..11)));
}

#[test]
fn ellipses_lead_to_neighbouring_groups() {
    let window = pager(7, 10, 120, 5).window;

    let previous = pager(window.previous_group().unwrap(), 10, 120, 5).window;
    let next = pager(window.next_group().unwrap(), 10, 120, 5).window;

    assert_eq!(previous.pages(), 1..6);
    assert_eq!(next.pages(), 11..13);
}
