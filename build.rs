fn main() {
    #[cfg(windows)]
    {
        let icon = "assets/zenscape.ico";
        if std::path::Path::new(icon).exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon(icon);
            if let Err(e) = res.compile() {
                println!("cargo:warning=failed to embed {icon}: {e}");
            }
        } else {
            println!("cargo:warning={icon} not found, skipping icon embedding");
        }
    }
}
