use tera::Tera;

pub fn load_templates() -> tera::Result<Tera> {
    Tera::new("templates/*.html")
}
