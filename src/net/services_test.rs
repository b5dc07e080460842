use super::*;

#[test]
fn blog_page_endpoint_carries_pagination() {
    assert_eq!(blog_page_endpoint(2, 6), "/api/blog?page=2&limit=6");
}

#[test]
fn blog_post_endpoint_uses_slug() {
    assert_eq!(blog_post_endpoint("hello-world"), "/api/blog/hello-world");
}

#[test]
fn gallery_image_endpoint_addresses_one_image() {
    assert_eq!(gallery_image_endpoint("g1", 3), "/api/gallery/g1/images/3");
}
