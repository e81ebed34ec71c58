//! Hand-authored page content.

use crate::pages::sections::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
}

const fn member(name: &'static str, role: &'static str, photo: &'static str) -> TeamMember {
    TeamMember { name, role, photo }
}

pub const DEVELOPERS: &[TeamMember] = &[
    member("Cadmo Neto", "Desenvolvedor", "/cadmo.jpeg"),
    member("Davi Freire", "Desenvolvedor", "/davi.jpeg"),
    member("Douglas Déda", "Desenvolvedor", "/doug.jpg"),
    member("Gabriel Leite", "Desenvolvedor", "/leite.jpg"),
    member("Marianna Ariel", "Desenvolvedora", "/mariel.jpg"),
    member("Pedro Sávio", "Desenvolvedor", "/pedro.jpg"),
    member("Yago Henner", "Desenvolvedor", "/yago.jpg"),
];

pub const CONSULTANTS: &[TeamMember] = &[
    member("Debora Nascimento", "Consultoria Técnica", "/debora.jpeg"),
    member("Edward Moreno", "Consultoria Técnica", "/edward.jpg"),
    member("Giovanny", "Consultoria Técnica", "/giovanny.jpeg"),
];

/// A named group of team members rendered under its own heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roster {
    pub title: &'static str,
    pub members: &'static [TeamMember],
}

pub const ROSTERS: &[Roster] = &[
    Roster {
        title: "Desenvolvedores",
        members: DEVELOPERS,
    },
    Roster {
        title: "Consultoria Técnica",
        members: CONSULTANTS,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Font Awesome classes.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const DIFFERENTIATORS: &[Feature] = &[
    Feature {
        icon: "fas fa-clock",
        title: "Rápido",
        description: "Economize tempo com nossa interface intuitiva e processos otimizados.",
    },
    Feature {
        icon: "fas fa-dollar-sign",
        title: "Econômico",
        description: "Solução acessível que não compromete seu orçamento.",
    },
    Feature {
        icon: "fas fa-users",
        title: "Simples",
        description: "Desenvolvido pensando na facilidade de uso para todos os usuários.",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "fas fa-box",
        title: "Gestão de Estoque",
        description: "Controle seu inventário em tempo real, com alertas de estoque baixo e relatórios detalhados.",
    },
    Feature {
        icon: "fas fa-chart-column",
        title: "Relatórios de Vendas",
        description: "Visualize o desempenho do seu negócio com gráficos intuitivos e análises detalhadas.",
    },
    Feature {
        icon: "fas fa-bolt",
        title: "Pedidos Rápidos",
        description: "Processe pedidos de forma eficiente, reduzindo filas e melhorando a experiência do cliente.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Section,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target.id())
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Funcionalidades",
        target: Section::Features,
    },
    NavLink {
        label: "Vídeo",
        target: Section::Video,
    },
    NavLink {
        label: "Equipe",
        target: Section::Team,
    },
];

pub const CONTACT_LINK: NavLink = NavLink {
    label: "Contato",
    target: Section::Contact,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rosters_cover_whole_team() {
        let total: usize = ROSTERS.iter().map(|r| r.members.len()).sum();
        assert_eq!(total, 10);
        assert_eq!(ROSTERS[0].members.len(), 7);
        assert_eq!(ROSTERS[1].members.len(), 3);
    }

    #[test]
    fn every_member_has_a_photo() {
        for member in DEVELOPERS.iter().chain(CONSULTANTS) {
            assert!(member.photo.starts_with('/'), "{} has no photo path", member.name);
            assert!(!member.role.is_empty());
        }
    }

    #[test]
    fn nav_links_point_at_page_anchors() {
        let hrefs: Vec<String> = NAV_LINKS.iter().map(NavLink::href).collect();
        assert_eq!(hrefs, vec!["#funcionalidades", "#video", "#equipe"]);
        assert_eq!(CONTACT_LINK.href(), "#contato");
    }
}
