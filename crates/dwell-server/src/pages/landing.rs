//! Static marketing page.

use std::fmt::Write as _;

use axum::response::Html;

use super::layout;

const STATS: &[(&str, &str)] = &[
    ("3,888,846+", "Users Trusted"),
    ("16,015,507+", "Designs Available"),
];

const SERVICES: &[&str] = &[
    "Modular Kitchen",
    "Bedroom",
    "Sofa",
    "Lights",
    "Wallpaper",
    "Wall Paint",
    "Crockery Units",
    "Bathroom",
];

const STEPS: &[(&str, &str)] = &[
    ("Design", "Your dream space begins with a thoughtful design plan."),
    ("Build", "From materials to finishes, every detail is executed flawlessly."),
    (
        "Move-In",
        "Enjoy your new space with our hassle-free civil work and installation services.",
    ),
];

const SHOWCASE: &[&str] = &[
    "Modern Kitchen",
    "Luxurious Bathroom",
    "Cozy Bedroom",
    "Stylish Furniture",
];

const FAQ: &[(&str, &str)] = &[
    (
        "How do I get started?",
        "Getting started is easy! Simply sign up for an account and follow our quick setup guide. We'll walk you through each step of the process.",
    ),
    (
        "What payment methods do you accept?",
        "We accept all major credit cards, PayPal, and bank transfers. All payments are processed securely through our payment partners.",
    ),
    (
        "Is there a free trial available?",
        "Yes! We offer a 14-day free trial with full access to all features. No credit card required to start your trial.",
    ),
    (
        "How can I contact support?",
        "Our support team is available 24/7 through our help center, email support, or live chat. We typically respond within 2 hours.",
    ),
];

#[must_use]
pub fn render() -> Html<String> {
    let mut body = String::new();

    body.push_str(
        "<section class=\"card\">\n\
         <h1>Beyond Blueprints. Inside Your Future.</h1>\n\
         <p>Don't just imagine it. Walk through your perfectly designed home in stunning 3D and virtual reality.</p>\n\
         <div class=\"grid\">\n",
    );
    for (value, label) in STATS {
        let _ = writeln!(body, "<div><h2>{value}</h2><p class=\"muted\">{label}</p></div>");
    }
    body.push_str(
        "</div>\n<p class=\"inline\"><a class=\"button\" href=\"/bookasession\">Book a Free Session</a>\
         <a class=\"button outline\" href=\"/viewonvr\">View on VR</a></p>\n</section>\n",
    );

    body.push_str("<section>\n<h2>End-to-End Interior Solutions</h2>\n<div class=\"grid\">\n");
    for service in SERVICES {
        let _ = writeln!(body, "<div class=\"choice\">{service}</div>");
    }
    body.push_str("</div>\n</section>\n");

    body.push_str("<section>\n<h2>Complete home interiors in 3 easy steps</h2>\n<div class=\"grid\">\n");
    for (index, (title, text)) in STEPS.iter().enumerate() {
        let _ = writeln!(
            body,
            "<div class=\"card\"><h3>{}. {title}</h3><p>{text}</p></div>",
            index + 1
        );
    }
    body.push_str("</div>\n</section>\n");

    body.push_str(
        "<section class=\"card\">\n<h2>Reimagine Your Home</h2>\n\
         <p>Where dreams take shape and spaces come alive. Our expert craftsmen blend timeless elegance \
         with modern innovation, creating personalized sanctuaries that tell your unique story. \
         Let's craft your perfect space together.</p>\n<div class=\"grid\">\n",
    );
    for item in SHOWCASE {
        let _ = writeln!(body, "<div class=\"choice\">{item}</div>");
    }
    body.push_str("</div>\n<p><a class=\"button\" href=\"/bookasession\">Start Your Journey</a></p>\n</section>\n");

    body.push_str(
        "<section class=\"card\">\n<h2>Ready to Transform Your Dream Home?</h2>\n\
         <p><a class=\"button\" href=\"/viewonvr\">view in VR</a></p>\n</section>\n",
    );

    body.push_str(
        "<section>\n<h2>Frequently Asked Questions</h2>\n\
         <p class=\"muted\">Find answers to common questions about our services</p>\n",
    );
    for (question, answer) in FAQ {
        let _ = writeln!(body, "<details class=\"card\"><summary>{question}</summary><p>{answer}</p></details>");
    }
    body.push_str("</section>\n");

    layout("Home Design", "", &body)
}
