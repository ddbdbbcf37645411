fn main() {
    if let Err(err) = tag_cloud_renderer::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
