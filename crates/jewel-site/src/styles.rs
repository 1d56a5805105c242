//! Inline stylesheet and page scripts.

/// Site-wide styles. Logical properties (`inset-inline-*`, `margin-inline-*`)
/// keep the layout correct in both text directions.
pub const SITE_STYLES: &str = r##"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color: #1a1a1a; background: #fafaf8; line-height: 1.6; }
[dir="rtl"] body { font-family: "Noto Naskh Arabic", "Noto Nastaliq Urdu", system-ui, sans-serif; }
a { color: inherit; text-decoration: none; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }

.site-header { background: #fff; border-bottom: 1px solid #eee; position: sticky; top: 0; z-index: 10; }
.site-header .container { display: flex; align-items: center; justify-content: space-between; gap: 1.5rem; height: 4.5rem; }
.logo { font-size: 1.4rem; font-weight: 700; letter-spacing: 0.02em; }
.logo span { color: #b08d57; }
.main-nav { display: flex; gap: 1.5rem; }
.main-nav a { font-weight: 500; color: #555; }
.main-nav a[aria-current="page"] { color: #1a1a1a; border-bottom: 2px solid #b08d57; }
.lang-switcher { display: flex; gap: 0.5rem; font-size: 0.9rem; }
.lang-switcher a { padding: 0.2rem 0.5rem; border-radius: 4px; color: #777; }
.lang-switcher a[aria-current="true"] { background: #1a1a1a; color: #fff; }

.btn { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 999px; font-weight: 600; }
.btn-primary { background: #1a1a1a; color: #fff; }
.btn-whatsapp { background: #25d366; color: #fff; }
.btn-outline { border: 1px solid #1a1a1a; }

.hero { background: linear-gradient(135deg, #f6f1e9, #fff); padding: 5rem 0; text-align: center; }
.hero .eyebrow { text-transform: uppercase; letter-spacing: 0.2em; color: #b08d57; font-size: 0.85rem; }
.hero h1 { font-size: 2.75rem; margin: 1rem 0; }
.hero p { max-width: 640px; margin: 0 auto 2rem; color: #555; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.hero-stats { display: flex; gap: 3rem; justify-content: center; margin-top: 3rem; }
.hero-stats strong { display: block; font-size: 1.75rem; }

.trust-strip { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1.5rem; padding: 3rem 0; }
.trust-item h3 { font-size: 1rem; }
.trust-item p { color: #666; font-size: 0.9rem; }

.section { padding: 4rem 0; }
.section-title { text-align: center; margin-bottom: 2.5rem; }
.section-title p { color: #666; }

.group-cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
.group-card { background: #fff; border-radius: 12px; padding: 2rem; box-shadow: 0 1px 3px rgba(0,0,0,0.06); }
.group-card h3 { margin-bottom: 0.5rem; }

.carousel { position: relative; }
.carousel-track { display: flex; gap: 1.5rem; overflow-x: auto; scroll-snap-type: x mandatory; scroll-behavior: smooth; padding-bottom: 1rem; }
.carousel-track .diamond-card { flex: 0 0 260px; scroll-snap-align: start; }
.carousel-controls { display: flex; gap: 0.5rem; justify-content: flex-end; margin-bottom: 1rem; }
.carousel-controls button { width: 2.5rem; height: 2.5rem; border-radius: 50%; border: 1px solid #ddd; background: #fff; cursor: pointer; }
[dir="rtl"] .carousel-controls button { transform: scaleX(-1); }

.diamond-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
.diamond-card { background: #fff; border-radius: 12px; overflow: hidden; box-shadow: 0 1px 3px rgba(0,0,0,0.06); display: flex; flex-direction: column; }
.diamond-card img { width: 100%; aspect-ratio: 1; object-fit: cover; background: #f3f3f3; }
.diamond-card .card-body { padding: 1rem; display: flex; flex-direction: column; gap: 0.35rem; flex: 1; }
.diamond-card .specs { color: #666; font-size: 0.85rem; }
.diamond-card .price { font-weight: 700; }
.diamond-card .price.on-request { color: #b08d57; font-weight: 600; }
.diamond-card .card-actions { display: flex; gap: 0.5rem; margin-top: auto; padding-top: 0.5rem; }
.badge { display: inline-block; font-size: 0.75rem; padding: 0.1rem 0.5rem; border-radius: 999px; background: #eef7ee; color: #2e7d32; }
.badge.out { background: #fbeaea; color: #c62828; }
.badge.count { background: #1a1a1a; color: #fff; margin-inline-start: 0.5rem; }

.listing-layout { display: grid; grid-template-columns: 260px 1fr; gap: 2rem; padding: 2rem 0 4rem; }
.group-tabs { display: flex; gap: 0.5rem; flex-wrap: wrap; padding-top: 2rem; }
.group-tabs a { padding: 0.5rem 1rem; border-radius: 999px; border: 1px solid #ddd; }
.group-tabs a[aria-current="page"] { background: #1a1a1a; color: #fff; border-color: #1a1a1a; }
.facets-sidebar { display: flex; flex-direction: column; gap: 1.5rem; }
.facet-group h3 { font-size: 0.95rem; margin-bottom: 0.5rem; }
.facet-options { display: flex; flex-wrap: wrap; gap: 0.4rem; }
.facet-option { font-size: 0.85rem; padding: 0.25rem 0.6rem; border-radius: 6px; border: 1px solid #ddd; background: #fff; }
.facet-option.selected { background: #1a1a1a; color: #fff; border-color: #1a1a1a; }
.facet-option.empty { opacity: 0.45; }
.facet-count { color: #999; margin-inline-start: 0.25rem; }
.carat-form { display: flex; gap: 0.5rem; align-items: end; flex-wrap: wrap; }
.carat-form input { width: 5rem; padding: 0.3rem; }
.results-toolbar { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; gap: 1rem; flex-wrap: wrap; }
.sort-options { display: flex; gap: 0.5rem; flex-wrap: wrap; font-size: 0.85rem; }
.sort-options a[aria-current="true"] { font-weight: 700; text-decoration: underline; }
.empty-state { text-align: center; padding: 4rem 1rem; color: #666; }

.detail-layout { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; padding: 2rem 0 4rem; }
.detail-layout img { width: 100%; border-radius: 12px; background: #f3f3f3; }
.spec-table { width: 100%; border-collapse: collapse; margin: 1.5rem 0; }
.spec-table th, .spec-table td { text-align: start; padding: 0.5rem 0; border-bottom: 1px solid #eee; }
.spec-table th { color: #666; font-weight: 500; width: 40%; }
.detail-price { font-size: 1.75rem; font-weight: 700; }

.testimonials { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; }
.testimonial { background: #fff; border-radius: 12px; padding: 1.5rem; }
.testimonial cite { display: block; margin-top: 1rem; font-style: normal; font-weight: 600; }
.testimonial cite span { color: #888; font-weight: 400; }

.cta { background: #1a1a1a; color: #fff; text-align: center; padding: 4rem 1.5rem; border-radius: 16px; margin: 4rem auto; }
.cta p { color: #ccc; margin: 1rem auto 2rem; max-width: 560px; }

.page-hero { padding: 3rem 0 1rem; }
.page-hero p { color: #666; }
.values { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
.contact-layout { display: grid; grid-template-columns: 1.4fr 1fr; gap: 3rem; padding: 2rem 0 4rem; }
.contact-form { display: flex; flex-direction: column; gap: 1rem; }
.contact-form label { display: flex; flex-direction: column; gap: 0.3rem; font-weight: 500; }
.contact-form input, .contact-form textarea { padding: 0.6rem; border: 1px solid #ddd; border-radius: 8px; font: inherit; }
.form-error { background: #fbeaea; color: #c62828; padding: 0.75rem 1rem; border-radius: 8px; }
.coming-soon { text-align: center; padding: 6rem 1rem; }

.site-footer { background: #111; color: #bbb; padding: 3rem 0 1.5rem; margin-top: 2rem; }
.site-footer .columns { display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; gap: 2rem; }
.site-footer h4 { color: #fff; margin-bottom: 0.75rem; }
.site-footer li { list-style: none; margin-bottom: 0.35rem; }
.site-footer .copyright { border-top: 1px solid #333; margin-top: 2rem; padding-top: 1rem; font-size: 0.85rem; }

.whatsapp-float { position: fixed; bottom: 1.5rem; width: 3.5rem; height: 3.5rem; border-radius: 50%; background: #25d366; color: #fff; display: flex; align-items: center; justify-content: center; font-size: 1.5rem; box-shadow: 0 4px 12px rgba(0,0,0,0.2); z-index: 20; }
.whatsapp-float.right { right: 1.5rem; }
.whatsapp-float.left { left: 1.5rem; }

@media (max-width: 900px) {
    .listing-layout, .detail-layout, .contact-layout { grid-template-columns: 1fr; }
    .site-footer .columns { grid-template-columns: 1fr 1fr; }
    .main-nav { display: none; }
}
"##;

/// Carousel buttons scroll the track by a fixed step. The sign flips in RTL
/// documents, where the track scrolls towards negative offsets.
pub const CAROUSEL_SCRIPT: &str = r##"
document.querySelectorAll('[data-carousel]').forEach(function (carousel) {
    var track = carousel.querySelector('.carousel-track');
    var rtl = document.documentElement.dir === 'rtl';
    carousel.querySelectorAll('[data-scroll]').forEach(function (button) {
        button.addEventListener('click', function () {
            var step = button.dataset.scroll === 'next' ? 320 : -320;
            track.scrollBy({ left: rtl ? -step : step, behavior: 'smooth' });
        });
    });
});
"##;
