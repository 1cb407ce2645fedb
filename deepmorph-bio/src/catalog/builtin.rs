use super::{BiosyntheticPotential, OrganismProfile};

fn profile(
    scientific_name: &str,
    common_name: &str,
    phylogenetic_group: &str,
    ecological_role: &str,
    compounds: [&str; 2],
    applications: [&str; 2],
) -> OrganismProfile {
    OrganismProfile {
        scientific_name: scientific_name.to_string(),
        common_name: common_name.to_string(),
        phylogenetic_group: phylogenetic_group.to_string(),
        ecological_role: ecological_role.to_string(),
        biosynthetic_potential: BiosyntheticPotential {
            has_potential: true,
            compounds: compounds.iter().map(|s| s.to_string()).collect(),
            applications: applications.iter().map(|s| s.to_string()).collect(),
        },
    }
}

pub(super) fn known_profiles() -> Vec<OrganismProfile> {
    vec![
        profile(
            "Lepetodrilus fucensis",
            "Vent limpet, grazer",
            "Gastropoda",
            "Primary consumer, grazer on bacterial mats",
            ["Antimicrobial peptides", "Heat-shock proteins"],
            ["Antibiotic development", "Thermostable enzymes"],
        ),
        profile(
            "Paralvinella sulfincola",
            "Thermophilic polychaete",
            "Annelida",
            "Thermophilic decomposer, sulfide oxidizer",
            ["Sulfide-binding proteins", "Thermostable enzymes"],
            ["Industrial biocatalysts", "Bioremediation"],
        ),
        profile(
            "Bathymodiolus thermophilus",
            "Hydrothermal vent mussel",
            "Bivalvia",
            "Chemosymbiotic filter feeder",
            ["Symbiont-derived polyketides", "Antimicrobial compounds"],
            ["Novel antibiotics", "Wound healing"],
        ),
        profile(
            "Riftia pachyptila",
            "Giant tube worm",
            "Annelida",
            "Chemosymbiotic primary producer",
            ["Hemoglobin variants", "Sulfide-binding proteins"],
            ["Blood substitutes", "Oxygen delivery systems"],
        ),
        profile(
            "Vulcanoctopus hydrothermalis",
            "Hydrothermal vent octopus",
            "Cephalopoda",
            "Predator, scavenger",
            ["Neurotoxins", "Pressure-adapted proteins"],
            ["Neuroprotective drugs", "Pain management"],
        ),
        profile(
            "Thermococcus barophilus",
            "Hyperthermophilic archaeon",
            "Archaea",
            "Extreme thermophile, decomposer",
            ["DNA polymerases", "Proteases"],
            ["PCR technology", "Industrial enzymes"],
        ),
        profile(
            "Alvinella pompejana",
            "Pompeii worm",
            "Annelida",
            "Extreme thermophile, biofilm grazer",
            ["Heat-shock proteins", "Collagen variants"],
            ["Thermal protection", "Tissue engineering"],
        ),
    ]
}

pub(super) fn novel_profiles() -> Vec<OrganismProfile> {
    vec![
        profile(
            "Abyssophilus xenomorphus sp. nov.",
            "Deep-sea xenophyophore candidate",
            "Foraminifera",
            "Sediment processor, potential symbiont host",
            ["Novel bioactive lipids", "Unique polysaccharides"],
            ["Anti-inflammatory agents", "Immunomodulators"],
        ),
        profile(
            "Thermobacterium profundum sp. nov.",
            "Uncharacterized thermophilic bacteria",
            "Bacteria",
            "Chemolithoautotroph, sulfur oxidizer",
            ["Novel polyketides", "Extremozymes"],
            ["Cancer therapy", "Industrial processes"],
        ),
        profile(
            "Hadalomonas psychrophila sp. nov.",
            "Hadal zone cold-adapted bacteria",
            "Bacteria",
            "Barophilic decomposer",
            ["Cold-active enzymes", "Antifreeze proteins"],
            ["Cryo-preservation", "Cold-chain logistics"],
        ),
    ]
}
