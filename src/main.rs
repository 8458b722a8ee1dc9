//! CSR entry point: mounts the app onto `<body>`.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(sabakan_web::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The binary only does something when built for the browser.
}
