mod app;
mod components;
mod game;

fn main() {
    dioxus::logger::initialize_default();

    eprintln!("{}", env!("BANNER").replace(r"\n", "\n").trim_matches('"')); // had to be escaped, see build.rs

    dioxus::launch(app::App);
}
