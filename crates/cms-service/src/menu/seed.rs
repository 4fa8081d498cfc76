//! One-time seeding of the default navigation hierarchy.

use futures::future::join_all;
use tracing::info;

use cms_core::error::AppError;
use cms_entity::menu::kind::MenuKind;

use super::service::{CreateMenuRequest, MenuService};

impl MenuService {
    /// Seeds the default four-section hierarchy with nested children.
    ///
    /// No-op when any menu already exists, so repeated startups and the
    /// seed endpoint cannot duplicate the structure.
    pub async fn seed_defaults(&self) -> Result<(), AppError> {
        if !self.find_all().await?.is_empty() {
            return Ok(());
        }

        let mut root_ids = Vec::with_capacity(4);
        for root in default_roots() {
            root_ids.push(self.create(root).await?.id);
        }

        // Child pages are independent of each other; create them all
        // concurrently.
        let results = join_all(
            default_children(&root_ids)
                .into_iter()
                .map(|child| self.create(child)),
        )
        .await;
        results.into_iter().collect::<Result<Vec<_>, _>>()?;

        info!("Default menu structure created");
        Ok(())
    }
}

fn entry(
    name: &str,
    url: &str,
    description: &str,
    parent_id: Option<i32>,
    sort_order: i32,
    kind: MenuKind,
) -> CreateMenuRequest {
    CreateMenuRequest {
        name: name.to_string(),
        url: url.to_string(),
        description: Some(description.to_string()),
        sort_order: Some(sort_order),
        is_active: Some(true),
        parent_id,
        kind: Some(kind),
        icon_image: None,
        css_class: None,
    }
}

fn default_roots() -> Vec<CreateMenuRequest> {
    vec![
        entry(
            "절재 김종서 장군",
            "about-general",
            "조선 전기 명재상이자 무장인 김종서 장군의 생애와 업적을 살펴봅니다.",
            None,
            1,
            MenuKind::Section,
        ),
        entry(
            "기념사업회",
            "organization",
            "김종서 장군을 기리는 기념사업회의 설립목적과 주요 활동을 소개합니다.",
            None,
            2,
            MenuKind::Section,
        ),
        entry(
            "자료실",
            "library",
            "김종서 장군과 관련된 학술자료, 보도자료, 사진 등을 제공합니다.",
            None,
            3,
            MenuKind::Section,
        ),
        entry(
            "연락처 & 오시는 길",
            "contact",
            "기념사업회 사무국 연락처와 찾아오시는 방법을 안내합니다.",
            None,
            4,
            MenuKind::Page,
        ),
    ]
}

fn default_children(root_ids: &[i32]) -> Vec<CreateMenuRequest> {
    let general = Some(root_ids[0]);
    let organization = Some(root_ids[1]);
    let library = Some(root_ids[2]);

    vec![
        entry(
            "생애 및 업적",
            "life",
            "김종서 장군의 출생부터 역사적 업적까지 상세한 생애를 소개합니다.",
            general,
            1,
            MenuKind::Page,
        ),
        entry(
            "역사적 의의",
            "significance",
            "조선 전기 정치사에서 김종서 장군이 가지는 특별한 의미를 분석합니다.",
            general,
            2,
            MenuKind::Page,
        ),
        entry(
            "관련 사료 및 연구",
            "sources",
            "김종서 장군과 관련된 역사 사료와 최신 연구 성과를 모았습니다.",
            general,
            3,
            MenuKind::Page,
        ),
        entry(
            "사진·영상 자료",
            "photos",
            "김종서 장군 관련 유적지, 문화재 등의 사진과 영상 자료입니다.",
            general,
            4,
            MenuKind::Page,
        ),
        entry(
            "사업회 소개",
            "overview",
            "김종서장군기념사업회의 설립 목적과 주요 사업을 소개합니다.",
            organization,
            1,
            MenuKind::Page,
        ),
        entry(
            "회장 인사말",
            "chairman",
            "김종서장군기념사업회 회장의 인사말과 비전을 전해드립니다.",
            organization,
            2,
            MenuKind::Page,
        ),
        entry(
            "연혁",
            "history",
            "기념사업회의 설립부터 현재까지의 주요 연혁을 정리했습니다.",
            organization,
            3,
            MenuKind::Page,
        ),
        entry(
            "선양사업",
            "projects",
            "김종서 장군의 정신을 기리는 다양한 선양사업을 소개합니다.",
            organization,
            4,
            MenuKind::Page,
        ),
        entry(
            "공지사항",
            "announcements",
            "기념사업회의 최신 소식과 중요한 공지사항을 확인하세요.",
            organization,
            5,
            MenuKind::Page,
        ),
        entry(
            "보도자료",
            "press",
            "기념사업회 활동과 관련된 언론 보도자료를 모았습니다.",
            library,
            1,
            MenuKind::Page,
        ),
        entry(
            "학술 자료·연구 보고서",
            "academic",
            "김종서 장군 관련 학술 논문과 연구 보고서를 제공합니다.",
            library,
            2,
            MenuKind::Page,
        ),
        entry(
            "사진·영상 아카이브",
            "archive",
            "역사적 가치가 있는 사진과 영상 자료를 체계적으로 보관합니다.",
            library,
            3,
            MenuKind::Page,
        ),
    ]
}
