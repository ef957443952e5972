use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod content;
mod dom;
mod error;
mod motion;
mod navigation;
mod pages {
    pub mod landing;
}

use components::{Reveal, Stagger};
use motion::{RevealSpec, RevealTrigger};
use navigation::Section;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 50.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |section: Section| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            dom::scroll_to(section);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <Reveal spec={RevealSpec::drop_in().on_mount()} class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <nav class="nav-content">
                <button class="nav-logo" onclick={go_to(Section::About)}>
                    { content::BRAND }
                </button>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <Stagger
                        specs={vec![RevealSpec::rise(-20.0)]}
                        interval={config::NAV_STAGGER}
                        base_delay={config::NAV_BASE_DELAY}
                        trigger={RevealTrigger::Mount}
                        class="nav-links"
                    >
                        { for Section::ALL.into_iter().map(|section| html! {
                            <button class="nav-link" onclick={go_to(section)}>
                                { section.label() }
                            </button>
                        }) }
                    </Stagger>
                    <button class="nav-cta" onclick={go_to(Section::Contact)}>
                        { content::Icon::Sparkles.glyph() }{ " Start Project" }
                    </button>
                </div>
            </nav>
            <style>{ NAV_STYLES }</style>
        </Reveal>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

const NAV_STYLES: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid rgba(229, 231, 235, 0.5);
        transition: box-shadow 0.3s ease, background 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(255, 255, 255, 0.95);
        box-shadow: 0 4px 20px rgba(15, 23, 42, 0.08);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
        height: 4rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-content button {
        background: none;
        border: none;
        cursor: pointer;
        font: inherit;
    }
    .nav-logo {
        font-size: 1.5rem;
        font-weight: 800;
        background: linear-gradient(to right, #2563eb, #7c3aed) !important;
        -webkit-background-clip: text !important;
        background-clip: text !important;
        color: transparent;
        transition: transform 0.2s ease;
    }
    .nav-logo:hover { transform: scale(1.05); }
    .nav-right {
        display: flex;
        align-items: center;
        gap: 2rem;
    }
    .nav-links {
        display: flex;
        gap: 2rem;
    }
    .nav-link {
        position: relative;
        color: #374151;
        transition: color 0.2s ease, transform 0.2s ease;
    }
    .nav-link::after {
        content: '';
        position: absolute;
        left: 0;
        right: 0;
        bottom: -4px;
        height: 2px;
        background: linear-gradient(to right, #2563eb, #7c3aed);
        transform: scaleX(0);
        transition: transform 0.3s ease;
    }
    .nav-link:hover {
        color: #2563eb;
        transform: translateY(-2px);
    }
    .nav-link:hover::after { transform: scaleX(1); }
    .nav-content .nav-cta {
        background: linear-gradient(to right, #2563eb, #7c3aed);
        color: #fff;
        border-radius: 0.5rem;
        padding: 0.5rem 1.25rem;
        transition: transform 0.2s ease;
    }
    .nav-cta:hover { transform: scale(1.05); }
    .nav-cta:active { transform: scale(0.95); }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
    }
    .burger-menu span {
        display: block;
        width: 24px;
        height: 2px;
        background: #374151;
    }
    @media (max-width: 768px) {
        .burger-menu { display: flex; }
        .nav-right {
            display: none;
            position: absolute;
            top: 4rem;
            left: 0;
            right: 0;
            flex-direction: column;
            padding: 1rem;
            background: rgba(255, 255, 255, 0.97);
        }
        .nav-right.mobile-menu-open { display: flex; }
        .nav-links { flex-direction: column; align-items: center; gap: 1rem; }
    }
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_lift_and_underline_on_hover() {
        assert!(NAV_STYLES.contains(".nav-link::after"));
        assert!(NAV_STYLES.contains("transform: scaleX(0);"));
        assert!(NAV_STYLES.contains(".nav-link:hover::after { transform: scaleX(1); }"));
        assert!(NAV_STYLES.contains("transform: translateY(-2px);"));
    }
}
