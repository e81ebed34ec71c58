use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::animation::{ViewOptions, Variant};
use crate::components::InView;
use crate::config::SITE_TITLE;
use crate::pages::sections::Section;

/// Calendar year according to the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. Todos os direitos reservados.", year, SITE_TITLE)
}

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer id={Section::Footer.id()} class="site-footer">
            <div class="container">
                <InView options={ViewOptions::any()} variant={Variant::fade_in_out()} class={classes!("footer-row")}>
                    <div class="footer-logo">
                        <img src="/quiosque.svg" alt="Quiosque Logo" width="24" height="24" />
                    </div>
                    <div class="footer-partners">
                        <img src="/ufslogo.jpg" alt="Logo UFS" width="100" height="50" />
                        <img src="/dcomplogo.png" alt="Logo DCOMP" width="100" height="50" />
                    </div>
                    <p class="copyright">{copyright_line(current_year())}</p>
                </InView>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_year() {
        assert_eq!(
            copyright_line(2025),
            "© 2025 Quiosque. Todos os direitos reservados."
        );
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
