mod flight;
mod page;

use crate::server::service::total_pages;

#[test]
fn computes_total_pages() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(5, 0), 0);
}
