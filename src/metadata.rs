//! Presentation metadata for the catalog entities: verbose names, help text
//! and declared constraints, as an admin front end would render them.

use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::{categories, products, versions};
use crate::permissions::PermissionInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    AutoId,
    Char,
    Text,
    Image,
    Decimal,
    Date,
    Boolean,
    ForeignKey,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldMeta {
    pub name: String,
    pub kind: FieldKind,
    pub verbose_name: String,
    pub help_text: Option<String>,
    pub max_length: Option<usize>,
    pub max_digits: Option<u32>,
    pub decimal_places: Option<u32>,
    pub nullable: bool,
    /// Whether an empty value passes validation.
    pub blank: bool,
    pub unique: bool,
    pub default: Option<String>,
    /// Set when the value is maintained by the storage layer.
    pub auto: Option<String>,
    /// `entity:on_delete`, for references.
    pub references: Option<String>,
    /// Storage directory for uploaded files.
    pub upload_to: Option<String>,
}

impl FieldMeta {
    fn new(name: &str, kind: FieldKind, verbose_name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            verbose_name: verbose_name.to_string(),
            help_text: None,
            max_length: None,
            max_digits: None,
            decimal_places: None,
            nullable: false,
            blank: false,
            unique: false,
            default: None,
            auto: None,
            references: None,
            upload_to: None,
        }
    }

    fn id() -> Self {
        let mut field = Self::new("id", FieldKind::AutoId, "ID");
        field.unique = true;
        field.blank = true;
        field
    }

    fn char(name: &str, verbose_name: &str, max_length: usize) -> Self {
        let mut field = Self::new(name, FieldKind::Char, verbose_name);
        field.max_length = Some(max_length);
        field
    }

    fn text(name: &str, verbose_name: &str, max_length: usize) -> Self {
        let mut field = Self::new(name, FieldKind::Text, verbose_name);
        field.max_length = Some(max_length);
        field
    }

    fn decimal(name: &str, verbose_name: &str, max_digits: u32, decimal_places: u32) -> Self {
        let mut field = Self::new(name, FieldKind::Decimal, verbose_name);
        field.max_digits = Some(max_digits);
        field.decimal_places = Some(decimal_places);
        field
    }

    fn reference(name: &str, verbose_name: &str, target: &str, on_delete: &str) -> Self {
        let mut field = Self::new(name, FieldKind::ForeignKey, verbose_name);
        field.references = Some(format!("{target}:{on_delete}"));
        field
    }

    fn help(mut self, help_text: &str) -> Self {
        self.help_text = Some(help_text.to_string());
        self
    }

    fn nullable(mut self) -> Self {
        self.nullable = true;
        self.blank = true;
        self
    }

    fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    fn default(mut self, value: &str) -> Self {
        self.default = Some(value.to_string());
        self.blank = true;
        self
    }

    fn auto(mut self, when: &str) -> Self {
        self.auto = Some(when.to_string());
        self.blank = true;
        self
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EntityMeta {
    pub name: String,
    pub table: String,
    pub verbose_name: String,
    pub verbose_name_plural: String,
    pub ordering: Vec<String>,
    pub fields: Vec<FieldMeta>,
    pub permissions: Vec<PermissionInfo>,
}

pub const ENTITY_NAMES: [&str; 3] = ["category", "product", "version"];

pub fn all() -> Vec<EntityMeta> {
    vec![category(), product(), version()]
}

pub fn by_name(name: &str) -> Option<EntityMeta> {
    match name {
        "category" => Some(category()),
        "product" => Some(product()),
        "version" => Some(version()),
        _ => None,
    }
}

pub fn category() -> EntityMeta {
    EntityMeta {
        name: "category".to_string(),
        table: "categories".to_string(),
        verbose_name: "Категория".to_string(),
        verbose_name_plural: "Категории".to_string(),
        ordering: Vec::new(),
        fields: vec![
            FieldMeta::id(),
            FieldMeta::char("name", "Название категории", categories::NAME_MAX_LENGTH)
                .help("Введите название категории"),
            FieldMeta::text(
                "description",
                "Информация о категории",
                categories::DESCRIPTION_MAX_LENGTH,
            )
            .help("Введите информацию о категории"),
        ],
        permissions: Vec::new(),
    }
}

pub fn product() -> EntityMeta {
    let mut image = FieldMeta::char("image", "Изображение продукта", products::IMAGE_MAX_LENGTH)
        .help("Загрузите изображение продукта")
        .nullable();
    image.kind = FieldKind::Image;
    image.upload_to = Some(products::IMAGE_UPLOAD_DIR.to_string());

    EntityMeta {
        name: "product".to_string(),
        table: "products".to_string(),
        verbose_name: "Продукт".to_string(),
        verbose_name_plural: "Продукты".to_string(),
        ordering: vec!["name".to_string(), "category".to_string()],
        fields: vec![
            FieldMeta::id(),
            FieldMeta::char("name", "Название продукта", products::NAME_MAX_LENGTH)
                .help("Введите название продукта")
                .nullable()
                .unique(),
            FieldMeta::text(
                "description",
                "Информация о продукте",
                products::DESCRIPTION_MAX_LENGTH,
            )
            .help("Введите информацию о продукте"),
            image,
            FieldMeta::reference("category", "Категория", "category", "set_null")
                .help("Выберите категорию продукта")
                .nullable(),
            FieldMeta::decimal(
                "price",
                "Цена продукта",
                products::PRICE_MAX_DIGITS,
                products::PRICE_DECIMAL_PLACES,
            )
            .help("Задайте цену продукта"),
            FieldMeta::new("created_at", FieldKind::Date, "Дата внесения продукта")
                .help("Задайте дату внесения продукта")
                .auto("on_create"),
            FieldMeta::new("updated_at", FieldKind::Date, "Дата последнего изменения продукта")
                .help("Задайте дату последнего изменения продукта")
                .auto("on_update"),
            FieldMeta::new("manufactured_at", FieldKind::Date, "Дата производства продукта")
                .help("Задайте дату производства продукта")
                .default("creation_date"),
            FieldMeta::reference("owner", "Создатель", "user", "set_null").nullable(),
            FieldMeta::new("is_published", FieldKind::Boolean, "Признак публикации").default("false"),
        ],
        permissions: products::PERMISSIONS
            .into_iter()
            .map(PermissionInfo::from)
            .collect(),
    }
}

pub fn version() -> EntityMeta {
    EntityMeta {
        name: "version".to_string(),
        table: "versions".to_string(),
        verbose_name: "Версия".to_string(),
        verbose_name_plural: "Версии".to_string(),
        ordering: vec!["version_name".to_string(), "version_number".to_string()],
        fields: vec![
            FieldMeta::id(),
            FieldMeta::reference("product", "Название продукта", "product", "cascade"),
            FieldMeta::decimal(
                "version_number",
                "Номер версии",
                versions::VERSION_NUMBER_MAX_DIGITS,
                versions::VERSION_NUMBER_DECIMAL_PLACES,
            )
            .help("Задайте номер версии"),
            FieldMeta::char(
                "version_name",
                "Название версии",
                versions::VERSION_NAME_MAX_LENGTH,
            )
            .help("Введите название версии")
            .unique(),
            FieldMeta::new("is_actual", FieldKind::Boolean, "Признак текущей версии").default("true"),
        ],
        permissions: Vec::new(),
    }
}
