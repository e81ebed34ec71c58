use yew::prelude::*;

use crate::components::{Footer, Header};
use crate::pages::sections::{
    ContactSection, DifferentiatorsSection, FeaturesSection, HeroSection, ObjectiveSection,
    TeamSection, VideoSection,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Header />
            <main>
                <HeroSection />
                <ObjectiveSection />
                <DifferentiatorsSection />
                <FeaturesSection />
                <VideoSection />
                <TeamSection />
                <ContactSection />
            </main>
            <Footer />
            <style>
                {r#"
        .landing-page {
            display: flex;
            min-height: 100vh;
            flex-direction: column;
            font-family: system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
            color: #0f172a;
        }
        .landing-page main {
            flex: 1;
        }
        .container {
            width: 100%;
            max-width: 1200px;
            margin: 0 auto;
            padding: 0 1.5rem;
            box-sizing: border-box;
        }
        .hero {
            padding: 6rem 0;
            background: linear-gradient(135deg, hsl(237, 99%, 69%), hsl(237, 99%, 85%));
        }
        .hero-grid {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 3rem;
            align-items: center;
        }
        .hero-text h1 {
            font-size: 3.5rem;
            font-weight: 700;
            letter-spacing: -0.03em;
            color: white;
            margin: 0 0 0.5rem;
        }
        .hero-text p {
            max-width: 600px;
            font-size: 1.25rem;
            font-weight: 500;
            color: white;
        }
        .hero-cta {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            margin-top: 1rem;
            padding: 0.75rem 1.5rem;
            border-radius: 0.375rem;
            background: white;
            color: hsl(237, 99%, 69%);
            font-weight: 600;
            text-decoration: none;
        }
        .hero-cta:hover {
            background: rgba(255, 255, 255, 0.9);
        }
        .macbook {
            position: relative;
            max-width: 800px;
            margin: 0 auto;
        }
        .macbook-lid {
            background: #e8e8e8;
            border: 2px solid #d1d1d1;
            border-radius: 0.75rem 0.75rem 0 0;
            padding: 1rem 1rem 0.5rem;
        }
        .macbook-screen {
            background: #121212;
            border: 1px solid #444;
            border-bottom: none;
            border-radius: 0.5rem 0.5rem 0 0;
            padding: 0.75rem 0.5rem 0.5rem;
        }
        .window-dots {
            display: flex;
            gap: 0.375rem;
            margin-bottom: 0.25rem;
            padding: 0 0.25rem;
        }
        .dot {
            width: 0.75rem;
            height: 0.75rem;
            border-radius: 50%;
        }
        .dot.red { background: #ff5f57; }
        .dot.yellow { background: #febc2e; }
        .dot.green { background: #28c840; }
        .screen-content,
        .laptop-screen {
            aspect-ratio: 16 / 10;
            overflow: hidden;
            background: white;
        }
        .screen-content img,
        .laptop-screen img,
        .tablet-screen img,
        .phone-screen img {
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .macbook-base {
            position: relative;
            height: 0.75rem;
            background: #e8e8e8;
            border: 2px solid #d1d1d1;
            border-top: none;
            border-radius: 0 0 0.75rem 0.75rem;
        }
        .macbook-notch {
            position: absolute;
            left: 50%;
            top: 50%;
            transform: translate(-50%, -50%);
            width: 2.5rem;
            height: 0.25rem;
            border-radius: 999px;
            background: #d1d1d1;
        }
        .macbook-shadow {
            position: absolute;
            bottom: -1rem;
            left: 1rem;
            right: 1rem;
            height: 1rem;
            border-radius: 999px;
            background: rgba(0, 0, 0, 0.1);
            filter: blur(8px);
        }
        .page-section {
            padding: 6rem 0;
        }
        .page-section.muted {
            background: #f1f5f9;
        }
        .page-section.brand {
            background: hsl(237, 99%, 69%);
        }
        .section-intro {
            display: flex;
            flex-direction: column;
            align-items: center;
            text-align: center;
            gap: 0.75rem;
        }
        .section-badge {
            display: inline-block;
            border-radius: 0.5rem;
            padding: 0.25rem 0.75rem;
            background: hsl(237, 99%, 69%);
            color: white;
            font-size: 0.875rem;
        }
        .section-intro h2 {
            font-size: 3rem;
            font-weight: 700;
            letter-spacing: -0.03em;
            margin: 0;
        }
        .section-intro p {
            max-width: 900px;
            font-size: 1.2rem;
            line-height: 1.6;
            color: #64748b;
        }
        .section-intro.inverted h2 {
            color: white;
        }
        .section-intro.inverted p {
            color: rgba(255, 255, 255, 0.8);
        }
        .objective-mockup {
            display: flex;
            justify-content: center;
            margin-top: 4rem;
        }
        .laptop {
            width: 100%;
            max-width: 800px;
        }
        .laptop-top {
            background: #1f2937;
            border-radius: 0.5rem 0.5rem 0 0;
            padding: 0.5rem 0.5rem 0.25rem;
        }
        .laptop-camera {
            width: 0.5rem;
            height: 0.5rem;
            margin: 0 auto;
            border-radius: 50%;
            background: #4b5563;
        }
        .laptop-screen {
            border: 8px solid #1f2937;
        }
        .laptop-bottom {
            height: 1rem;
            background: #374151;
            border-radius: 0 0 0.5rem 0.5rem;
        }
        .card-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
            max-width: 1024px;
            margin: 0 auto;
            padding: 3rem 0;
        }
        .card {
            height: 100%;
            box-sizing: border-box;
            display: flex;
            flex-direction: column;
            gap: 1rem;
            padding: 1.5rem;
            border: 1px solid #e2e8f0;
            border-radius: 0.75rem;
            background: white;
            box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        }
        .card.centered {
            align-items: center;
            text-align: center;
        }
        .card-icon {
            width: fit-content;
            padding: 0.75rem;
            border-radius: 999px;
            background: hsl(237, 99%, 90%);
            color: hsl(237, 99%, 69%);
            font-size: 1.4rem;
        }
        .card h3 {
            font-size: 1.25rem;
            margin: 0;
        }
        .card p {
            margin: 0;
            color: #64748b;
        }
        .features-grid {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 3rem;
            align-items: center;
            max-width: 1152px;
            margin: 0 auto;
            padding: 3rem 0;
        }
        .feature-list {
            display: flex;
            flex-direction: column;
            gap: 2rem;
        }
        .feature-devices {
            display: flex;
            justify-content: center;
        }
        .devices {
            position: relative;
        }
        .tablet {
            background: #1f2937;
            border-radius: 1rem;
            padding: 0.5rem;
            box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
        }
        .tablet-screen {
            aspect-ratio: 3 / 4;
            overflow: hidden;
            border-radius: 0.5rem;
            background: white;
        }
        .phone {
            position: absolute;
            right: -2.5rem;
            bottom: 2.5rem;
            width: 50%;
            padding: 0.25rem;
            border-radius: 1rem;
            background: #1f2937;
            transform: rotate(6deg);
            box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
        }
        .phone-screen {
            aspect-ratio: 9 / 16;
            overflow: hidden;
            border-radius: 0.5rem;
            background: white;
        }
        .home-bar {
            width: 2.5rem;
            height: 0.25rem;
            margin: 0.5rem auto 0;
            border-radius: 999px;
            background: #4b5563;
        }
        .video-wrapper {
            max-width: 896px;
            margin: 0 auto;
            padding: 3rem 0;
        }
        .video-frame {
            aspect-ratio: 16 / 9;
            overflow: hidden;
            border-radius: 0.5rem;
            box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
        }
        .rosters {
            max-width: 1024px;
            margin: 0 auto;
            padding: 3rem 0;
        }
        .roster h3 {
            font-size: 1.5rem;
            text-align: center;
            margin: 4rem 0 2rem;
        }
        .roster:first-child h3 {
            margin-top: 0;
        }
        .team-grid {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 2rem;
        }
        .team-card {
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 1rem;
        }
        .team-photo {
            overflow: hidden;
            border-radius: 50%;
        }
        .team-photo img {
            display: block;
            aspect-ratio: 1;
            object-fit: cover;
        }
        .team-info {
            text-align: center;
        }
        .team-info h4 {
            font-size: 1.25rem;
            margin: 0 0 0.25rem;
        }
        .team-info p {
            font-size: 0.875rem;
            color: #64748b;
            margin: 0;
        }
        .contact-email {
            text-align: center;
            font-size: 1.125rem;
            font-weight: 500;
        }
        .contact-email a {
            color: white;
            text-decoration: none;
        }
        .contact-email a:hover {
            text-decoration: underline;
        }
        .site-footer {
            border-top: 1px solid #e2e8f0;
            padding: 3rem 0;
            background: white;
        }
        .footer-row {
            display: flex;
            align-items: center;
            justify-content: space-between;
            gap: 1rem;
        }
        .footer-logo img {
            height: 1.5rem;
            width: auto;
        }
        .footer-partners {
            display: flex;
            align-items: center;
            gap: 1rem;
        }
        .footer-partners img {
            height: 2.5rem;
            width: auto;
        }
        .copyright {
            font-size: 0.75rem;
            color: #64748b;
        }
        @media (max-width: 1024px) {
            .hero-grid,
            .features-grid {
                grid-template-columns: 1fr;
            }
            .feature-devices {
                order: -1;
            }
            .team-grid {
                grid-template-columns: repeat(3, 1fr);
            }
        }
        @media (max-width: 767px) {
            .hero,
            .page-section {
                padding: 3rem 0;
            }
            .hero-text h1 {
                font-size: 2.25rem;
            }
            .section-intro h2 {
                font-size: 2rem;
            }
            .card-grid,
            .team-grid {
                grid-template-columns: repeat(2, 1fr);
            }
            .footer-row {
                flex-direction: column;
            }
        }
        @media (max-width: 480px) {
            .card-grid,
            .team-grid {
                grid-template-columns: 1fr;
            }
        }
                "#}
            </style>
        </div>
    }
}
