#![no_main]
use libfuzzer_sys::fuzz_target;

// Fuzzes the insert-then-match invariant: any route successfully
// registered with `add_route` must be found by `lookup` built from the same
// literal URL. Arbitrary path fragments are spliced onto a fixed scheme/host
// so `http::Uri` has a chance at accepting the result.
fuzz_target!(|data: (Vec<(String, i32)>, String)| {
    let mut router = urlmux::Router::new();
    let mut registered = Vec::new();

    for (path, value) in data.0 {
        let url = format!("https://fuzz.test/{path}");
        if router.add_route("GET", &url, value).is_ok() {
            registered.push((url, value));
        }
    }

    for (url, value) in &registered {
        if let Ok(Some(found)) = router.lookup("GET", url) {
            assert_eq!(found.value, value);
        }
    }

    let url = format!("https://fuzz.test/{}", data.1);
    let _ = router.lookup("GET", &url);
});
