//! HTML markup for the section panels, the biography card and the fallback
//! view. The web layer injects these strings as `innerHTML`; every piece of
//! content text goes through [`escape`] first.

use crate::content::{
    self, Link, SectionContent, BROWSER_RECOMMENDATION, FALLBACK_LINKS, INSTRUCTIONS, PROFILE,
};
use crate::section::SectionId;
use std::borrow::Cow;
use std::fmt::Write;

/// Attribute on the close control; the host wires clicks on it to `close()`.
pub const CLOSE_ACTION_ATTR: &str = "data-action";
pub const CLOSE_ACTION: &str = "close";

pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn tags(out: &mut String, class: &str, items: &[&str]) {
    out.push_str("<div class=\"tags\">");
    for item in items {
        let _ = write!(out, "<span class=\"{class}\">{}</span>", escape(item));
    }
    out.push_str("</div>");
}

fn list(out: &mut String, items: &[&str]) {
    out.push_str("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>");
}

fn link(out: &mut String, class: &str, link: &Link) {
    let _ = write!(
        out,
        "<a class=\"{class}\" href=\"{}\">{}</a>",
        escape(link.href),
        escape(link.label)
    );
}

/// Panel markup for the open section, or `None` when nothing is open.
pub fn render_panel(active: Option<SectionId>) -> Option<String> {
    active.map(render_section)
}

pub fn render_section(id: SectionId) -> String {
    let mut out = String::with_capacity(2048);
    let _ = write!(
        out,
        "<div class=\"panel-card\" data-section=\"{}\">\
         <button class=\"panel-close\" {CLOSE_ACTION_ATTR}=\"{CLOSE_ACTION}\" aria-label=\"Close\">&times;</button>",
        escape(id.label())
    );
    match content::content(id) {
        SectionContent::About {
            paragraphs,
            frontend,
            backend,
        } => {
            out.push_str("<h2>About Me</h2>");
            for p in paragraphs {
                let _ = write!(out, "<p>{}</p>", escape(p));
            }
            out.push_str("<div class=\"columns\"><div><h3>Frontend</h3>");
            list(&mut out, frontend);
            out.push_str("</div><div><h3>Backend</h3>");
            list(&mut out, backend);
            out.push_str("</div></div>");
        }
        SectionContent::Projects(projects) => {
            out.push_str("<h2>Projects</h2><div class=\"grid\">");
            for p in projects {
                let _ = write!(
                    out,
                    "<article class=\"card\"><h3>{}</h3><p>{}</p>",
                    escape(p.title),
                    escape(p.description)
                );
                tags(&mut out, "tag", p.tech);
                out.push_str("<div class=\"links\">");
                link(&mut out, "code", &Link { label: "Code", href: p.code });
                link(&mut out, "demo", &Link { label: "Demo", href: p.demo });
                out.push_str("</div></article>");
            }
            out.push_str("</div>");
        }
        SectionContent::Skills(groups) => {
            out.push_str("<h2>Skills</h2>");
            for g in groups {
                let _ = write!(out, "<section><h3>{}</h3>", escape(g.category));
                tags(&mut out, "pill", g.skills);
                let _ = write!(
                    out,
                    "<div class=\"meter\"><div class=\"level\" style=\"width: {}%\"></div></div></section>",
                    g.level.min(100)
                );
            }
        }
        SectionContent::Contact { intro, channels } => {
            let _ = write!(out, "<h2>Get In Touch</h2><p>{}</p><div class=\"grid\">", escape(intro));
            for c in channels {
                let _ = write!(
                    out,
                    "<a class=\"channel\" href=\"{}\"><h3>{}</h3><p>{}</p></a>",
                    escape(c.href),
                    escape(c.kind),
                    escape(c.display)
                );
            }
            // Display only: the button does not submit anywhere.
            out.push_str(
                "</div><form class=\"contact-form\">\
                 <input type=\"text\" name=\"name\" placeholder=\"Your Name\">\
                 <input type=\"email\" name=\"email\" placeholder=\"Your Email\">\
                 <textarea name=\"message\" rows=\"4\" placeholder=\"Your Message\"></textarea>\
                 <button type=\"button\">Send Message</button></form>",
            );
        }
        SectionContent::SocialLife {
            organization,
            involvement,
            technical_skills,
            soft_skills,
        } => {
            let _ = write!(
                out,
                "<h2>Social Life</h2><div class=\"card highlight\"><h3>{}</h3><p>{}</p>",
                escape(organization.name),
                escape(organization.summary)
            );
            tags(&mut out, "pill", organization.badges);
            out.push_str("</div><h3>Key Events &amp; Involvement</h3>");
            for e in involvement {
                let _ = write!(
                    out,
                    "<article class=\"card\"><header><h4>{}</h4><p class=\"role\">{}</p>\
                     <span class=\"period\">{}</span></header><p>{}</p>",
                    escape(e.title),
                    escape(e.role),
                    escape(e.period),
                    escape(e.description)
                );
                tags(&mut out, "tag", e.achievements);
                out.push_str("</article>");
            }
            out.push_str(
                "<div class=\"card growth\"><h3>Leadership &amp; Skills Developed</h3>\
                 <div class=\"columns\"><div><h4>Technical Skills</h4>",
            );
            list(&mut out, technical_skills);
            out.push_str("</div><div><h4>Soft Skills</h4>");
            list(&mut out, soft_skills);
            out.push_str("</div></div></div>");
        }
        SectionContent::Resume {
            pdf,
            download_name,
            jobs,
            education,
        } => {
            let _ = write!(
                out,
                "<h2>Resume</h2><a class=\"download\" href=\"{}\" download=\"{}\">{}</a>\
                 <section><h3>Experience</h3>",
                escape(pdf.href),
                escape(download_name),
                escape(pdf.label)
            );
            for j in jobs {
                let _ = write!(
                    out,
                    "<article class=\"card\"><h4>{}</h4><p class=\"company\">{}</p>\
                     <p class=\"period\">{}</p><p>{}</p></article>",
                    escape(j.title),
                    escape(j.company),
                    escape(j.period),
                    escape(j.description)
                );
            }
            out.push_str("</section><section><h3>Education</h3>");
            for e in education {
                let _ = write!(
                    out,
                    "<article class=\"card\"><h4>{}</h4><p class=\"company\">{}</p>\
                     <p class=\"period\">{}</p></article>",
                    escape(e.degree),
                    escape(e.school),
                    escape(e.period)
                );
            }
            out.push_str("</section>");
        }
    }
    out.push_str("</div>");
    out
}

pub fn render_bio() -> String {
    format!(
        "<div class=\"bio\"><div class=\"portrait\"><img src=\"{}\" alt=\"{}\"></div>\
         <h1>{}</h1><p class=\"title\">{}</p><p class=\"blurb\">{}</p></div>",
        escape(PROFILE.image),
        escape(PROFILE.name),
        escape(PROFILE.name),
        escape(PROFILE.title),
        escape(PROFILE.blurb)
    )
}

pub fn render_instructions() -> String {
    format!("<p>{}</p>", escape(INSTRUCTIONS))
}

pub fn render_fallback() -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(
        "<div class=\"fallback-card\"><h1>WebGL Not Supported</h1>\
         <p>Your browser doesn&#39;t support WebGL, which is required for the 3D portfolio \
         experience. Please try using a modern browser like Chrome, Firefox, Safari, or Edge.</p>\
         <h2>Alternative Portfolio Links</h2><div class=\"grid\">",
    );
    for l in FALLBACK_LINKS {
        link(&mut out, "alt-link", l);
    }
    let _ = write!(
        out,
        "</div><div class=\"advice\"><h3>Browser Recommendations</h3><p>{}</p></div></div>",
        escape(BROWSER_RECOMMENDATION)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("plain"), "plain");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(
            escape("<a href=\"x\">R&D's</a>"),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn every_panel_has_a_close_control() {
        for id in SectionId::ALL {
            let html = render_section(id);
            assert!(html.contains("data-action=\"close\""), "{id}");
            assert!(html.contains(&format!("data-section=\"{}\"", id.label())));
        }
        assert_eq!(render_panel(None), None);
    }

    #[test]
    fn resume_offers_pdf_download() {
        let html = render_section(SectionId::Resume);
        assert!(html.contains("href=\"/resume.pdf\" download=\"Wajdy_Bouon_Resume.pdf\""));
        assert!(html.contains("Degree in Computer Science"));
    }

    #[test]
    fn contact_form_is_display_only() {
        let html = render_section(SectionId::Contact);
        assert!(html.contains("<form class=\"contact-form\">"));
        assert!(html.contains("placeholder=\"Your Message\""));
        assert!(html.contains("<button type=\"button\">Send Message</button>"));
        assert!(!html.contains("type=\"submit\""));
        assert!(!html.contains(" action=\""));
    }

    #[test]
    fn fallback_lists_alternatives() {
        let html = render_fallback();
        for l in FALLBACK_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", l.href)));
        }
        assert!(html.contains("Edge 79+"));
    }
}
