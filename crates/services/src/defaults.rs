//! The landing document served before any admin save has happened, and
//! written durably by `cmd/seed`.

use domains::landing::{
    About, ContactDetails, CourseCard, Feature, Hero, LandingSections, Stat, Testimonial,
};

pub fn default_landing_sections() -> LandingSections {
    LandingSections {
        hero: Hero {
            title: "Welcome to Chalkline Institute".into(),
            subtitle: "Your IT Career Starts Here".into(),
            cta_label: "Enroll Now".into(),
        },
        about: About {
            description: "Chalkline Institute is a premier IT training institute \
                          empowering students with industry-ready skills."
                .into(),
        },
        courses: vec![
            CourseCard {
                title: "Fullstack Development".into(),
                duration: "3 Months".into(),
                career_opportunities:
                    "Frontend Developer, Backend Developer, Fullstack Developer".into(),
                technologies: vec!["React".into(), "Node.js".into(), "MongoDB".into()],
                roles: vec!["Developer".into()],
            },
            CourseCard {
                title: "Data Science".into(),
                duration: "4 Months".into(),
                career_opportunities: "Data Analyst, Data Scientist".into(),
                technologies: vec![
                    "Python".into(),
                    "SQL".into(),
                    "Machine Learning".into(),
                ],
                roles: vec!["Analyst".into(), "Scientist".into()],
            },
        ],
        features: vec![
            Feature {
                title: "Industry-Focused".into(),
                description: "Curriculum designed with current market demands".into(),
            },
            Feature {
                title: "Expert Mentorship".into(),
                description: "Learn from working IT professionals".into(),
            },
            Feature {
                title: "Job-Ready Skills".into(),
                description: "Hands-on projects to prepare for real-world jobs".into(),
            },
        ],
        stats: vec![
            Stat {
                label: "Students Trained".into(),
                value: "500+".into(),
            },
            Stat {
                label: "Courses".into(),
                value: "10+".into(),
            },
            Stat {
                label: "Placements".into(),
                value: "100%".into(),
            },
        ],
        testimonials: vec![
            Testimonial {
                name: "John Doe".into(),
                role: "Software Engineer".into(),
                quote: "The course completely transformed my career. Within two \
                        months of finishing I was placed at a great company."
                    .into(),
                rating: 5,
            },
            Testimonial {
                name: "Jane Smith".into(),
                role: "Data Analyst".into(),
                quote: "Supportive trainers and fully hands-on classes. The best \
                        training institute around."
                    .into(),
                rating: 5,
            },
        ],
        contact: ContactDetails {
            phone: "+1 555 0134".into(),
            email: "hello@chalkline.example".into(),
            address: "12 Harbor Street, Springfield".into(),
        },
    }
}
