//! `imbed check <candidate>` – classify a string as image URL or not.

use imbed_core::classify;

pub fn run_check(candidate: &str) {
    if classify::is_image_url(candidate) {
        println!("image URL");
    } else {
        println!("not an image URL");
    }
}
