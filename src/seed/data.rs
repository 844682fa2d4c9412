//! Default categories and sample posts inserted on first initialization.

use crate::category::model::CreateCategoryRequest;
use crate::post::post_model::CreatePostRequest;

const DEFAULT_CATEGORIES: [(&str, &str, &str); 5] = [
    ("Notícias", "Últimas notícias do Flamengo", "#FF0000"),
    ("Jogadores", "Informações sobre os jogadores", "#000000"),
    ("História", "História e tradição do clube", "#FF0000"),
    ("Taças", "Conquistas e títulos", "#FFD700"),
    ("Maracanã", "Nossa casa, nosso templo", "#FF0000"),
];

pub fn default_categories() -> Vec<CreateCategoryRequest> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(name, description, color)| CreateCategoryRequest {
            name: name.to_string(),
            description: description.to_string(),
            color: Some(color.to_string()),
        })
        .collect()
}

pub fn sample_posts() -> Vec<CreatePostRequest> {
    vec![
        CreatePostRequest {
            title: "Flamengo conquista mais um título histórico".to_string(),
            content: "Em uma partida épica no Maracanã, o Flamengo mostrou mais uma vez por que é o clube de maior torcida do Brasil. Com gols de Gabigol e Arrascaeta, o Mengão venceu por 2x1 e conquistou mais um título para sua galeria já repleta de troféus.\n\nA partida foi marcada pela garra e determinação dos jogadores rubro-negros, que não se intimidaram diante da pressão e jogaram com o coração. O técnico destacou a importância da torcida, que compareceu em peso ao estádio e empurrou o time durante os 90 minutos.\n\nEste título representa mais um capítulo na rica história do Clube de Regatas do Flamengo, fundado em 1895 e que se tornou uma paixão nacional.".to_string(),
            excerpt: "Em partida épica no Maracanã, Flamengo conquista mais um título com gols de Gabigol e Arrascaeta".to_string(),
            category: "Notícias".to_string(),
            tags: vec![
                "titulo".to_string(),
                "maracana".to_string(),
                "gabigol".to_string(),
                "arrascaeta".to_string(),
            ],
            image_url: Some("https://images.unsplash.com/photo-1574629810360-7efbbe195018?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80".to_string()),
            published: true,
        },
        CreatePostRequest {
            title: "A história gloriosa do Clube de Regatas do Flamengo".to_string(),
            content: "Fundado em 15 de novembro de 1895, o Clube de Regatas do Flamengo nasceu da fusão entre duas grandes paixões: o remo e o futebol. Inicialmente criado como clube de regatas, o Flamengo rapidamente se tornou uma das maiores potências do futebol brasileiro e mundial.\n\nAo longo de mais de 125 anos de história, o Mengão conquistou inúmeros títulos nacionais e internacionais, incluindo duas Libertadores da América e um Mundial de Clubes da FIFA. Grandes ídolos vestiram a camisa rubro-negra, como Zico, o maior de todos os tempos, Júnior, Bebeto, Romário e muitos outros.\n\nO clube não é apenas futebol, mas uma verdadeira nação que une milhões de corações apaixonados pelo Brasil e pelo mundo.".to_string(),
            excerpt: "Conheça a rica história do Clube de Regatas do Flamengo, desde sua fundação em 1895 até os dias atuais".to_string(),
            category: "História".to_string(),
            tags: vec![
                "historia".to_string(),
                "fundacao".to_string(),
                "zico".to_string(),
                "tradicao".to_string(),
            ],
            image_url: Some("https://images.unsplash.com/photo-1431324155629-1a6deb1dec8d?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80".to_string()),
            published: true,
        },
    ]
}
