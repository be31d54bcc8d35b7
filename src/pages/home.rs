use yew::prelude::*;

use crate::components::{
    contact_form::ContactForm,
    fade_in::FadeIn,
    icon::IconGlyph,
    meta::MetaTags,
    portfolio_card::PortfolioCard,
    section::Section,
    service_card::ServiceCard,
};
use crate::content::{
    Icon, CONTACT_CHANNELS, HERO_IMAGE, PAGE_META, PORTFOLIO, SERVICES, SOCIAL_LINKS, STATS,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <MetaTags meta={PAGE_META} />

            <header id="home" class="hero">
                <div class="hero-background">
                    <img src={HERO_IMAGE} alt="Cinematic Wedding Photography Tripura" />
                </div>
                <div class="hero-shade"></div>
                <div class="hero-content">
                    <p class="hero-kicker">{"Visual Publishing House • Agartala"}</p>
                    <h1 class="hero-title">{"Your Life,"}<br />{" Unwritten."}</h1>
                    <p class="hero-subtitle">
                        {"We don't just take photos. We author your visual legacy. From intimate weddings to grand commercial narratives."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#portfolio" class="hero-cta primary">{"View Our Work"}</a>
                        <a href="#contact" class="hero-cta secondary">{"Book a Session"}</a>
                    </div>
                </div>
            </header>

            <Section id="philosophy" class="philosophy">
                <div class="philosophy-content">
                    <FadeIn>
                        <h2>{"The Meaning of Mukumu Bijap"}</h2>
                        <div class="accent-rule"></div>
                        <p>
                            {"In the heart of our heritage, "}<strong>{"'Mukumu'"}</strong>
                            {" whispers of culture and tradition, while "}<strong>{"'Bijap'"}</strong>
                            {" signifies a book."}
                        </p>
                        <p>
                            {"We founded this agency on a simple yet profound belief: "}
                            <span class="emphasis">{"Every person carries a story worthy of a book."}</span>
                            {" Whether it is the timeless rituals of a Tripuri wedding, the fast-paced energy of a corporate brand, or the quiet portrait of an artist, we act as the authors of your visual history. We are not just photographers; we are archivists of the present."}
                        </p>
                    </FadeIn>
                </div>
            </Section>

            <Section id="portfolio" class="portfolio">
                <div class="section-heading split">
                    <div>
                        <span class="eyebrow">{"Curated Gallery"}</span>
                        <h2>{"Selected Works"}</h2>
                    </div>
                    <a href="#" class="archive-link desktop-only">
                        {"View Full Archive "}<IconGlyph icon={Icon::ArrowRight} />
                    </a>
                </div>
                <div class="portfolio-grid">
                    { for PORTFOLIO.iter().enumerate().map(|(index, item)| html! {
                        <FadeIn key={item.title} delay={(index as u32 % 3) * 100}>
                            <PortfolioCard item={item.clone()} />
                        </FadeIn>
                    }) }
                </div>
                <div class="archive-footer mobile-only">
                    <a href="#" class="archive-link">
                        {"View Full Archive "}<IconGlyph icon={Icon::ArrowRight} />
                    </a>
                </div>
            </Section>

            <Section id="services" class="services">
                <div class="section-heading centered">
                    <h2>{"Our Expertise"}</h2>
                    <p>{"We offer bespoke packages tailored to the unique needs of weddings, brands, and artists."}</p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceCard key={service.title} service={service.clone()} />
                    }) }
                </div>
            </Section>

            <section class="stats">
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div key={stat.label} class="stat">
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </section>

            <Section id="contact" class="contact">
                <div class="contact-grid">
                    <div class="contact-info">
                        <h2>{"Let's Write Your Story"}</h2>
                        <p class="contact-lead">
                            {"We are currently accepting bookings for the 2025-2026 wedding season and commercial projects in Tripura & Northeast India."}
                        </p>
                        <div class="contact-channels">
                            { for CONTACT_CHANNELS.iter().map(|channel| html! {
                                <div key={channel.heading} class="contact-channel">
                                    <div class="channel-icon">
                                        <IconGlyph icon={channel.icon} />
                                    </div>
                                    <div>
                                        <h4>{channel.heading}</h4>
                                        <p>{channel.text}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="contact-social">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a key={social.label} href={social.href} class="social-link" aria-label={social.label}>
                                    <IconGlyph icon={social.icon} />
                                </a>
                            }) }
                        </div>
                    </div>
                    <div class="contact-card">
                        <ContactForm />
                    </div>
                </div>
            </Section>

            <style>
                {r#"
                    .home-page {
                        background: #fafaf9;
                        min-height: 100vh;
                        color: #292524;
                        font-family: system-ui, -apple-system, sans-serif;
                    }
                    .home-page h1, .home-page h2, .home-page h3 {
                        font-family: Georgia, serif;
                        font-weight: normal;
                        color: #1c1917;
                    }
                    .page-section {
                        padding: 5rem 6rem;
                    }
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #1c1917;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        opacity: 0.6;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        max-width: 56rem;
                        margin: 5rem auto 0;
                        padding: 0 1rem;
                    }
                    .hero-kicker {
                        color: #fbbf24;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .hero .hero-title {
                        color: #fff;
                        font-size: 4.5rem;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        color: #e7e5e4;
                        font-size: 1.25rem;
                        font-weight: 300;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-cta {
                        padding: 1rem 2rem;
                        border-radius: 2px;
                        text-decoration: none;
                        letter-spacing: 0.05em;
                        transition: all 0.3s;
                    }
                    .hero-cta.primary {
                        background: #d97706;
                        color: #fff;
                    }
                    .hero-cta.primary:hover {
                        background: #b45309;
                    }
                    .hero-cta.secondary {
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        color: #fff;
                        backdrop-filter: blur(4px);
                    }
                    .hero-cta.secondary:hover {
                        background: #fff;
                        color: #1c1917;
                    }
                    .philosophy-content {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .philosophy-content p {
                        font-size: 1.125rem;
                        line-height: 1.75;
                        color: #57534e;
                        margin-bottom: 1.5rem;
                    }
                    .emphasis {
                        font-style: italic;
                        color: #292524;
                    }
                    .accent-rule {
                        width: 6rem;
                        height: 0.25rem;
                        background: #d97706;
                        margin: 0 auto 2rem;
                    }
                    .fade-in {
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition-property: opacity, transform;
                        transition-timing-function: ease-out;
                    }
                    .fade-in.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .portfolio, .contact {
                        background: #fff;
                    }
                    .section-heading.split {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        margin-bottom: 3rem;
                    }
                    .section-heading.centered {
                        text-align: center;
                        max-width: 42rem;
                        margin: 0 auto 4rem;
                        color: #57534e;
                    }
                    .eyebrow {
                        color: #d97706;
                        font-weight: bold;
                        letter-spacing: 0.1em;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                    }
                    .archive-link {
                        color: #78716c;
                        text-decoration: none;
                    }
                    .archive-link:hover {
                        color: #d97706;
                    }
                    .archive-footer {
                        margin-top: 3rem;
                        text-align: center;
                    }
                    .portfolio-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .portfolio-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 2px;
                        cursor: pointer;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: box-shadow 0.3s;
                    }
                    .portfolio-card:hover {
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    .portfolio-image {
                        aspect-ratio: 3 / 4;
                        overflow: hidden;
                        background: #e7e5e4;
                    }
                    .portfolio-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .portfolio-card:hover .portfolio-image img {
                        transform: scale(1.05);
                    }
                    .portfolio-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(28, 25, 23, 0.9), rgba(28, 25, 23, 0.2), transparent);
                        opacity: 0;
                        transition: opacity 0.3s;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 1.5rem;
                    }
                    .portfolio-card:hover .portfolio-overlay {
                        opacity: 1;
                    }
                    .portfolio-category {
                        color: #fbbf24;
                        font-size: 0.75rem;
                        font-weight: bold;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        margin-bottom: 0.5rem;
                    }
                    .home-page .portfolio-title {
                        color: #fff;
                        font-size: 1.25rem;
                    }
                    .portfolio-tags {
                        display: flex;
                        gap: 0.5rem;
                        margin-top: 0.75rem;
                    }
                    .portfolio-tag {
                        font-size: 0.75rem;
                        color: #d6d3d1;
                        border: 1px solid #57534e;
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                    }
                    .services {
                        background: #f5f5f4;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .service-card {
                        background: #fff;
                        padding: 2rem;
                        border: 1px solid #f5f5f4;
                        border-radius: 2px;
                        display: flex;
                        flex-direction: column;
                        transition: border-color 0.3s;
                    }
                    .service-card:hover {
                        border-color: #fde68a;
                    }
                    .service-icon {
                        font-size: 2.5rem;
                        color: #d97706;
                        margin-bottom: 1.5rem;
                    }
                    .service-description {
                        color: #57534e;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .service-footer {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-top: auto;
                    }
                    .service-price {
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #a8a29e;
                    }
                    .service-details {
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #1c1917;
                    }
                    .service-details:hover {
                        color: #d97706;
                    }
                    .stats {
                        background: #1c1917;
                        color: #fff;
                        padding: 4rem 1.5rem;
                        border-top: 1px solid #292524;
                        border-bottom: 1px solid #292524;
                    }
                    .stats-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        text-align: center;
                    }
                    .stat-value {
                        font-family: Georgia, serif;
                        font-size: 2.25rem;
                        color: #f59e0b;
                        margin-bottom: 0.5rem;
                    }
                    .stat-label {
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #a8a29e;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }
                    .contact-lead {
                        color: #57534e;
                        font-size: 1.125rem;
                        margin-bottom: 2.5rem;
                    }
                    .contact-channel {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .channel-icon {
                        background: #fef3c7;
                        color: #b45309;
                        padding: 0.75rem;
                        border-radius: 50%;
                    }
                    .contact-social {
                        margin-top: 2.5rem;
                        display: flex;
                        gap: 1rem;
                    }
                    .social-link {
                        padding: 0.75rem;
                        background: #f5f5f4;
                        border-radius: 50%;
                        color: inherit;
                        text-decoration: none;
                        transition: all 0.3s;
                    }
                    .social-link:hover {
                        background: #d97706;
                        color: #fff;
                    }
                    .contact-card {
                        background: #fafaf9;
                        padding: 2rem;
                        border-radius: 8px;
                        border: 1px solid #e7e5e4;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        font-size: 0.75rem;
                        font-weight: bold;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #78716c;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input, .form-field select, .form-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        background: #fff;
                        border: 1px solid #d6d3d1;
                        padding: 0.75rem;
                        border-radius: 2px;
                        font: inherit;
                    }
                    .form-field input:focus, .form-field select:focus, .form-field textarea:focus {
                        outline: none;
                        border-color: #f59e0b;
                    }
                    .form-submit {
                        background: #1c1917;
                        color: #fff;
                        border: none;
                        padding: 1rem;
                        letter-spacing: 0.05em;
                        cursor: pointer;
                        transition: background 0.3s;
                    }
                    .form-submit:hover {
                        background: #d97706;
                    }
                    .mobile-only {
                        display: none;
                    }
                    @media (max-width: 1024px) {
                        .page-section {
                            padding: 5rem 3rem;
                        }
                        .portfolio-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (max-width: 768px) {
                        .page-section {
                            padding: 5rem 1.5rem;
                        }
                        .hero .hero-title {
                            font-size: 3rem;
                        }
                        .hero-cta-group {
                            flex-direction: column;
                        }
                        .portfolio-grid, .services-grid, .form-row {
                            grid-template-columns: 1fr;
                        }
                        .stats-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .desktop-only {
                            display: none;
                        }
                        .mobile-only {
                            display: block;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn every_anchor_has_a_section() {
        let rendered = ServerRenderer::<Home>::new().render().await;

        for id in ["home", "philosophy", "portfolio", "services", "contact"] {
            assert!(rendered.contains(&format!(r#"id="{}""#, id)), "missing #{}", id);
        }
    }

    #[tokio::test]
    async fn renders_whole_catalogue() {
        let rendered = ServerRenderer::<Home>::new().render().await;

        assert_eq!(rendered.matches(r#"class="portfolio-card""#).count(), PORTFOLIO.len());
        assert_eq!(rendered.matches(r#"class="service-card""#).count(), SERVICES.len());
        for stat in STATS.iter() {
            assert!(rendered.contains(stat.label));
        }
    }

    #[tokio::test]
    async fn content_starts_hidden_until_seen() {
        let rendered = ServerRenderer::<Home>::new().render().await;

        assert!(!rendered.contains("fade-in visible"));
        assert!(rendered.contains("transition-delay: 200ms;"));
    }

    #[tokio::test]
    async fn carries_page_metadata() {
        let rendered = ServerRenderer::<Home>::new().render().await;

        assert!(rendered.contains(r#"name="description""#));
        assert!(rendered.contains(r#"name="keywords""#));
    }
}
