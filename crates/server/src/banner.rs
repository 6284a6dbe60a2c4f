pub fn print_banner(version: &str) {
    let banner = format!(
        r#"
 ███████╗██╗  ██╗███████╗██████╗
 ██╔════╝╚██╗██╔╝██╔════╝██╔══██╗    fxfacebook
 █████╗   ╚███╔╝ █████╗  ██████╔╝    v{}
 ██╔══╝   ██╔██╗ ██╔══╝  ██╔══██╗
 ██║     ██╔╝ ██╗██║     ██████╔╝
 ╚═╝     ╚═╝  ╚═╝╚═╝     ╚═════╝
"#,
        version
    );

    tracing::info!("{}", banner);
}
