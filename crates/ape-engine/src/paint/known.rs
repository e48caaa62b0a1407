//! Named color table.
//!
//! Every entry is an opaque sRGB color (`alpha == 255`). Names follow the
//! common web/X11/Crayola naming; [`ALL`] lists each one together
//! with a human-readable display name.
//!
//! Lookups by name go through [`Color::named`](super::Color::named), which
//! ignores case, spaces, underscores and hyphens.

use super::Color;

pub const ABSOLUTE_ZERO: Color = Color::rgb(0, 72, 186);
pub const ACID_GREEN: Color = Color::rgb(176, 191, 26);
pub const AERO: Color = Color::rgb(124, 185, 232);
pub const AFRICAN_VIOLET: Color = Color::rgb(178, 132, 190);
pub const AIR_SUPERIORITY_BLUE: Color = Color::rgb(114, 160, 193);
pub const ALICE_BLUE: Color = Color::rgb(240, 248, 255);
pub const ALIZARIN: Color = Color::rgb(219, 45, 67);
pub const ALLOY_ORANGE: Color = Color::rgb(196, 98, 16);
pub const ALMOND: Color = Color::rgb(239, 222, 205);
pub const AMARANTH_DEEP_PURPLE: Color = Color::rgb(159, 43, 104);
pub const AMARANTH_PINK: Color = Color::rgb(241, 156, 187);
pub const AMARANTH_PURPLE: Color = Color::rgb(171, 39, 79);
pub const AMAZON: Color = Color::rgb(59, 122, 87);
pub const AMBER: Color = Color::rgb(255, 191, 0);
pub const AMETHYST: Color = Color::rgb(153, 102, 204);
pub const ANDROID_GREEN: Color = Color::rgb(61, 220, 132);
pub const ANTIQUE_BRASS: Color = Color::rgb(205, 149, 117);
pub const ANTIQUE_BRONZE: Color = Color::rgb(102, 93, 30);
pub const ANTIQUE_FUCHSIA: Color = Color::rgb(145, 92, 131);
pub const ANTIQUE_RUBY: Color = Color::rgb(132, 27, 45);
pub const ANTIQUE_WHITE: Color = Color::rgb(250, 235, 215);
pub const APRICOT: Color = Color::rgb(251, 206, 177);
pub const AQUA: Color = Color::rgb(0, 255, 255);
pub const AQUAMARINE: Color = Color::rgb(127, 255, 212);
pub const ARCTIC_LIME: Color = Color::rgb(208, 255, 20);
pub const ARTICHOKE_GREEN: Color = Color::rgb(75, 111, 68);
pub const ARYLIDE_YELLOW: Color = Color::rgb(233, 214, 107);
pub const ASH_GRAY: Color = Color::rgb(178, 190, 181);
pub const ATOMIC_TANGERINE: Color = Color::rgb(255, 153, 102);
pub const AUREOLIN: Color = Color::rgb(253, 238, 0);
pub const AZURE: Color = Color::rgb(0, 127, 255);
pub const AZURE_X11_WEB_COLOR: Color = Color::rgb(240, 255, 255);
pub const BABY_BLUE: Color = Color::rgb(137, 207, 240);
pub const BABY_BLUE_EYES: Color = Color::rgb(161, 202, 241);
pub const BABY_PINK: Color = Color::rgb(244, 194, 194);
pub const BABY_POWDER: Color = Color::rgb(254, 254, 250);
pub const BAKER_MILLER_PINK: Color = Color::rgb(255, 145, 175);
pub const BANANA_MANIA: Color = Color::rgb(250, 231, 181);
pub const BARBIE_PINK: Color = Color::rgb(218, 24, 132);
pub const BARN_RED: Color = Color::rgb(124, 10, 2);
pub const BATTLESHIP_GREY: Color = Color::rgb(132, 132, 130);
pub const BEAU_BLUE: Color = Color::rgb(188, 212, 230);
pub const BEAVER: Color = Color::rgb(159, 129, 112);
pub const BEIGE: Color = Color::rgb(245, 245, 220);
pub const B_DAZZLED_BLUE: Color = Color::rgb(46, 88, 148);
pub const BIG_DIP_O_RUBY: Color = Color::rgb(156, 37, 66);
pub const BISQUE: Color = Color::rgb(255, 228, 196);
pub const BISTRE: Color = Color::rgb(61, 43, 31);
pub const BISTRE_BROWN: Color = Color::rgb(150, 113, 23);
pub const BITTER_LEMON: Color = Color::rgb(202, 224, 13);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const BLACK_BEAN: Color = Color::rgb(61, 12, 2);
pub const BLACK_CORAL: Color = Color::rgb(84, 98, 111);
pub const BLACK_OLIVE: Color = Color::rgb(59, 60, 54);
pub const BLACK_SHADOWS: Color = Color::rgb(191, 175, 178);
pub const BLANCHED_ALMOND: Color = Color::rgb(255, 235, 205);
pub const BLAST_OFF_BRONZE: Color = Color::rgb(165, 113, 100);
pub const BLEU_DE_FRANCE: Color = Color::rgb(49, 140, 231);
pub const BLIZZARD_BLUE: Color = Color::rgb(172, 229, 238);
pub const BLOOD_RED: Color = Color::rgb(102, 0, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const BLUE_CRAYOLA: Color = Color::rgb(31, 117, 254);
pub const BLUE_MUNSELL: Color = Color::rgb(0, 147, 175);
pub const BLUE_NCS: Color = Color::rgb(0, 135, 189);
pub const BLUE_PANTONE: Color = Color::rgb(0, 24, 168);
pub const BLUE_PIGMENT: Color = Color::rgb(51, 51, 153);
pub const BLUE_BELL: Color = Color::rgb(162, 162, 208);
pub const BLUE_GRAY_CRAYOLA: Color = Color::rgb(102, 153, 204);
pub const BLUE_JEANS: Color = Color::rgb(93, 173, 236);
pub const BLUE_SAPPHIRE: Color = Color::rgb(18, 97, 128);
pub const BLUE_VIOLET: Color = Color::rgb(138, 43, 226);
pub const BLUE_YONDER: Color = Color::rgb(80, 114, 167);
pub const BLUETIFUL: Color = Color::rgb(60, 105, 231);
pub const BLUSH: Color = Color::rgb(222, 93, 131);
pub const BOLE: Color = Color::rgb(121, 68, 59);
pub const BONE: Color = Color::rgb(227, 218, 201);
pub const BRICK_RED: Color = Color::rgb(203, 65, 84);
pub const BRIGHT_LILAC: Color = Color::rgb(216, 145, 239);
pub const BRIGHT_YELLOW_CRAYOLA: Color = Color::rgb(255, 170, 29);
pub const BRONZE: Color = Color::rgb(205, 127, 50);
pub const BROWN: Color = Color::rgb(136, 84, 11);
pub const BROWN_SUGAR: Color = Color::rgb(175, 110, 77);
pub const BUD_GREEN: Color = Color::rgb(123, 182, 97);
pub const BUFF: Color = Color::rgb(255, 198, 128);
pub const BURGUNDY: Color = Color::rgb(128, 0, 32);
pub const BURLYWOOD: Color = Color::rgb(222, 184, 135);
pub const BURNISHED_BROWN: Color = Color::rgb(161, 122, 116);
pub const BURNT_ORANGE: Color = Color::rgb(204, 85, 0);
pub const BURNT_SIENNA: Color = Color::rgb(233, 116, 81);
pub const BURNT_UMBER: Color = Color::rgb(138, 51, 36);
pub const BYZANTINE: Color = Color::rgb(189, 51, 164);
pub const BYZANTIUM: Color = Color::rgb(112, 41, 99);
pub const CADET_BLUE: Color = Color::rgb(95, 158, 160);
pub const CADET_GREY: Color = Color::rgb(145, 163, 176);
pub const CADMIUM_GREEN: Color = Color::rgb(0, 107, 60);
pub const CADMIUM_ORANGE: Color = Color::rgb(237, 135, 45);
pub const CAFE_AU_LAIT: Color = Color::rgb(166, 123, 91);
pub const CAFE_NOIR: Color = Color::rgb(75, 54, 33);
pub const CAMBRIDGE_BLUE: Color = Color::rgb(163, 193, 173);
pub const CAMEL: Color = Color::rgb(193, 154, 107);
pub const CAMEO_PINK: Color = Color::rgb(239, 187, 204);
pub const CANARY: Color = Color::rgb(255, 255, 153);
pub const CANARY_YELLOW: Color = Color::rgb(255, 239, 0);
pub const CANDY_PINK: Color = Color::rgb(228, 113, 122);
pub const CARDINAL: Color = Color::rgb(196, 30, 58);
pub const CARIBBEAN_GREEN: Color = Color::rgb(0, 204, 153);
pub const CARMINE: Color = Color::rgb(150, 0, 24);
pub const CARMINE_M_P: Color = Color::rgb(215, 0, 64);
pub const CARNATION_PINK: Color = Color::rgb(255, 166, 201);
pub const CARNELIAN: Color = Color::rgb(179, 27, 27);
pub const CAROLINA_BLUE: Color = Color::rgb(86, 160, 211);
pub const CARROT_ORANGE: Color = Color::rgb(237, 145, 33);
pub const CATAWBA: Color = Color::rgb(112, 54, 66);
pub const CEDAR_CHEST: Color = Color::rgb(201, 90, 73);
pub const CELADON: Color = Color::rgb(172, 225, 175);
pub const CELESTE: Color = Color::rgb(178, 255, 255);
pub const CERISE: Color = Color::rgb(222, 49, 99);
pub const CERULEAN: Color = Color::rgb(0, 123, 167);
pub const CERULEAN_BLUE: Color = Color::rgb(42, 82, 190);
pub const CERULEAN_FROST: Color = Color::rgb(109, 155, 195);
pub const CERULEAN_CRAYOLA: Color = Color::rgb(29, 172, 214);
pub const CERULEAN_RGB: Color = Color::rgb(0, 64, 255);
pub const CHAMPAGNE: Color = Color::rgb(247, 231, 206);
pub const CHAMPAGNE_PINK: Color = Color::rgb(241, 221, 207);
pub const CHARCOAL: Color = Color::rgb(54, 69, 79);
pub const CHARM_PINK: Color = Color::rgb(230, 143, 172);
pub const CHARTREUSE_WEB: Color = Color::rgb(128, 255, 0);
pub const CHERRY_BLOSSOM_PINK: Color = Color::rgb(255, 183, 197);
pub const CHESTNUT: Color = Color::rgb(149, 69, 53);
pub const CHILI_RED: Color = Color::rgb(226, 61, 40);
pub const CHINA_PINK: Color = Color::rgb(222, 111, 161);
pub const CHINESE_RED: Color = Color::rgb(170, 56, 30);
pub const CHINESE_VIOLET: Color = Color::rgb(133, 96, 136);
pub const CHINESE_YELLOW: Color = Color::rgb(255, 178, 0);
pub const CHOCOLATE_TRADITIONAL: Color = Color::rgb(123, 63, 0);
pub const CHOCOLATE_WEB: Color = Color::rgb(210, 105, 30);
pub const CINEREOUS: Color = Color::rgb(152, 129, 123);
pub const CINNABAR: Color = Color::rgb(227, 66, 52);
pub const CINNAMON_SATIN: Color = Color::rgb(205, 96, 126);
pub const CITRINE: Color = Color::rgb(228, 208, 10);
pub const CITRON: Color = Color::rgb(159, 169, 31);
pub const CLARET: Color = Color::rgb(127, 23, 52);
pub const COFFEE: Color = Color::rgb(111, 78, 55);
pub const COLUMBIA_BLUE: Color = Color::rgb(185, 217, 235);
pub const CONGO_PINK: Color = Color::rgb(248, 131, 121);
pub const COOL_GREY: Color = Color::rgb(140, 146, 172);
pub const COPPER: Color = Color::rgb(184, 115, 51);
pub const COPPER_CRAYOLA: Color = Color::rgb(218, 138, 103);
pub const COPPER_PENNY: Color = Color::rgb(173, 111, 105);
pub const COPPER_RED: Color = Color::rgb(203, 109, 81);
pub const COPPER_ROSE: Color = Color::rgb(153, 102, 102);
pub const COQUELICOT: Color = Color::rgb(255, 56, 0);
pub const CORAL: Color = Color::rgb(255, 127, 80);
pub const CORAL_PINK: Color = Color::rgb(248, 131, 121);
pub const CORDOVAN: Color = Color::rgb(137, 63, 69);
pub const CORN: Color = Color::rgb(251, 236, 93);
pub const CORNFLOWER_BLUE: Color = Color::rgb(100, 149, 237);
pub const CORNSILK: Color = Color::rgb(255, 248, 220);
pub const COSMIC_COBALT: Color = Color::rgb(46, 45, 136);
pub const COSMIC_LATTE: Color = Color::rgb(255, 248, 231);
pub const COYOTE_BROWN: Color = Color::rgb(129, 97, 60);
pub const COTTON_CANDY: Color = Color::rgb(255, 188, 217);
pub const CREAM: Color = Color::rgb(255, 253, 208);
pub const CRIMSON: Color = Color::rgb(220, 20, 60);
pub const CRIMSON_UA: Color = Color::rgb(158, 27, 50);
pub const CULTURED_PEARL: Color = Color::rgb(245, 245, 245);
pub const CYAN: Color = Color::rgb(0, 255, 255);
pub const CYAN_PROCESS: Color = Color::rgb(0, 183, 235);
pub const CYBER_GRAPE: Color = Color::rgb(88, 66, 124);
pub const CYBER_YELLOW: Color = Color::rgb(255, 211, 0);
pub const CYCLAMEN: Color = Color::rgb(245, 111, 161);
pub const DANDELION: Color = Color::rgb(254, 216, 93);
pub const DARK_BROWN: Color = Color::rgb(101, 67, 33);
pub const DARK_BYZANTIUM: Color = Color::rgb(93, 57, 84);
pub const DARK_CYAN: Color = Color::rgb(0, 139, 139);
pub const DARK_ELECTRIC_BLUE: Color = Color::rgb(83, 104, 120);
pub const DARK_GOLDENROD: Color = Color::rgb(184, 134, 11);
pub const DARK_GREEN_X11: Color = Color::rgb(0, 100, 0);
pub const DARK_JUNGLE_GREEN: Color = Color::rgb(26, 36, 33);
pub const DARK_KHAKI: Color = Color::rgb(189, 183, 107);
pub const DARK_LAVA: Color = Color::rgb(72, 60, 50);
pub const DARK_LIVER_HORSES: Color = Color::rgb(84, 61, 55);
pub const DARK_MAGENTA: Color = Color::rgb(139, 0, 139);
pub const DARK_OLIVE_GREEN: Color = Color::rgb(85, 107, 47);
pub const DARK_ORANGE: Color = Color::rgb(255, 140, 0);
pub const DARK_ORCHID: Color = Color::rgb(153, 50, 204);
pub const DARK_PURPLE: Color = Color::rgb(48, 25, 52);
pub const DARK_RED: Color = Color::rgb(139, 0, 0);
pub const DARK_SALMON: Color = Color::rgb(233, 150, 122);
pub const DARK_SEA_GREEN: Color = Color::rgb(143, 188, 143);
pub const DARK_SIENNA: Color = Color::rgb(60, 20, 20);
pub const DARK_SKY_BLUE: Color = Color::rgb(140, 190, 214);
pub const DARK_SLATE_BLUE: Color = Color::rgb(72, 61, 139);
pub const DARK_SLATE_GRAY: Color = Color::rgb(47, 79, 79);
pub const DARK_SPRING_GREEN: Color = Color::rgb(23, 114, 69);
pub const DARK_TURQUOISE: Color = Color::rgb(0, 206, 209);
pub const DARK_VIOLET: Color = Color::rgb(148, 0, 211);
pub const DAVY_S_GREY: Color = Color::rgb(85, 85, 85);
pub const DEEP_CERISE: Color = Color::rgb(218, 50, 135);
pub const DEEP_CHAMPAGNE: Color = Color::rgb(250, 214, 165);
pub const DEEP_CHESTNUT: Color = Color::rgb(185, 78, 72);
pub const DEEP_JUNGLE_GREEN: Color = Color::rgb(0, 75, 73);
pub const DEEP_PINK: Color = Color::rgb(255, 20, 147);
pub const DEEP_SAFFRON: Color = Color::rgb(255, 153, 51);
pub const DEEP_SKY_BLUE: Color = Color::rgb(0, 191, 255);
pub const DEEP_SPACE_SPARKLE: Color = Color::rgb(74, 100, 108);
pub const DEEP_TAUPE: Color = Color::rgb(126, 94, 96);
pub const DENIM: Color = Color::rgb(21, 96, 189);
pub const DENIM_BLUE: Color = Color::rgb(34, 67, 182);
pub const DESERT: Color = Color::rgb(193, 154, 107);
pub const DESERT_SAND: Color = Color::rgb(237, 201, 175);
pub const DIM_GRAY: Color = Color::rgb(105, 105, 105);
pub const DODGER_BLUE: Color = Color::rgb(30, 144, 255);
pub const DRAB_DARK_BROWN: Color = Color::rgb(74, 65, 42);
pub const DUKE_BLUE: Color = Color::rgb(0, 0, 156);
pub const DUTCH_WHITE: Color = Color::rgb(239, 223, 187);
pub const EBONY: Color = Color::rgb(85, 93, 80);
pub const ECRU: Color = Color::rgb(194, 178, 128);
pub const EERIE_BLACK: Color = Color::rgb(27, 27, 27);
pub const EGGPLANT: Color = Color::rgb(97, 64, 81);
pub const EGGSHELL: Color = Color::rgb(240, 234, 214);
pub const ELECTRIC_LIME: Color = Color::rgb(204, 255, 0);
pub const ELECTRIC_PURPLE: Color = Color::rgb(191, 0, 255);
pub const ELECTRIC_VIOLET: Color = Color::rgb(143, 0, 255);
pub const EMERALD: Color = Color::rgb(80, 200, 120);
pub const EMINENCE: Color = Color::rgb(108, 48, 130);
pub const ENGLISH_LAVENDER: Color = Color::rgb(180, 131, 149);
pub const ENGLISH_RED: Color = Color::rgb(171, 75, 82);
pub const ENGLISH_VERMILLION: Color = Color::rgb(204, 71, 75);
pub const ENGLISH_VIOLET: Color = Color::rgb(86, 60, 92);
pub const ERIN: Color = Color::rgb(0, 255, 64);
pub const ETON_BLUE: Color = Color::rgb(150, 200, 162);
pub const FALLOW: Color = Color::rgb(193, 154, 107);
pub const FALU_RED: Color = Color::rgb(128, 24, 24);
pub const FANDANGO: Color = Color::rgb(181, 51, 137);
pub const FANDANGO_PINK: Color = Color::rgb(222, 82, 133);
pub const FAWN: Color = Color::rgb(229, 170, 112);
pub const FERN_GREEN: Color = Color::rgb(79, 121, 66);
pub const FIELD_DRAB: Color = Color::rgb(108, 84, 30);
pub const FIERY_ROSE: Color = Color::rgb(255, 84, 112);
pub const FINN: Color = Color::rgb(104, 48, 104);
pub const FIREBRICK: Color = Color::rgb(178, 34, 34);
pub const FIRE_ENGINE_RED: Color = Color::rgb(206, 32, 41);
pub const FLAME: Color = Color::rgb(226, 88, 34);
pub const FLAX: Color = Color::rgb(238, 220, 130);
pub const FLIRT: Color = Color::rgb(162, 0, 109);
pub const FLORAL_WHITE: Color = Color::rgb(255, 250, 240);
pub const FOREST_GREEN_WEB: Color = Color::rgb(34, 139, 34);
pub const FRENCH_BEIGE: Color = Color::rgb(166, 123, 91);
pub const FRENCH_BISTRE: Color = Color::rgb(133, 109, 77);
pub const FRENCH_BLUE: Color = Color::rgb(0, 114, 187);
pub const FRENCH_FUCHSIA: Color = Color::rgb(253, 63, 146);
pub const FRENCH_LILAC: Color = Color::rgb(134, 96, 142);
pub const FRENCH_LIME: Color = Color::rgb(158, 253, 56);
pub const FRENCH_MAUVE: Color = Color::rgb(212, 115, 212);
pub const FRENCH_PINK: Color = Color::rgb(253, 108, 158);
pub const FRENCH_RASPBERRY: Color = Color::rgb(199, 44, 72);
pub const FRENCH_SKY_BLUE: Color = Color::rgb(119, 181, 254);
pub const FRENCH_VIOLET: Color = Color::rgb(136, 6, 206);
pub const FROSTBITE: Color = Color::rgb(233, 54, 167);
pub const FUCHSIA: Color = Color::rgb(255, 0, 255);
pub const FUCHSIA_CRAYOLA: Color = Color::rgb(193, 84, 193);
pub const FULVOUS: Color = Color::rgb(228, 132, 0);
pub const FUZZY_WUZZY: Color = Color::rgb(135, 66, 31);
pub const GAINSBORO: Color = Color::rgb(220, 220, 220);
pub const GAMBOGE: Color = Color::rgb(228, 155, 15);
pub const GENERIC_VIRIDIAN: Color = Color::rgb(0, 127, 102);
pub const GHOST_WHITE: Color = Color::rgb(248, 248, 255);
pub const GLAUCOUS: Color = Color::rgb(96, 130, 182);
pub const GLOSSY_GRAPE: Color = Color::rgb(171, 146, 179);
pub const GO_GREEN: Color = Color::rgb(0, 171, 102);
pub const GOLD_METALLIC: Color = Color::rgb(212, 175, 55);
pub const GOLD_WEB_GOLDEN: Color = Color::rgb(255, 215, 0);
pub const GOLD_CRAYOLA: Color = Color::rgb(230, 190, 138);
pub const GOLD_FUSION: Color = Color::rgb(133, 117, 78);
pub const GOLDEN_BROWN: Color = Color::rgb(153, 101, 21);
pub const GOLDEN_POPPY: Color = Color::rgb(252, 194, 0);
pub const GOLDEN_YELLOW: Color = Color::rgb(255, 223, 0);
pub const GOLDENROD: Color = Color::rgb(218, 165, 32);
pub const GOTHAM_GREEN: Color = Color::rgb(0, 87, 63);
pub const GRANITE_GRAY: Color = Color::rgb(103, 103, 103);
pub const GRANNY_SMITH_APPLE: Color = Color::rgb(168, 228, 160);
pub const GRAY_WEB: Color = Color::rgb(128, 128, 128);
pub const GRAY_X11_GRAY: Color = Color::rgb(190, 190, 190);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const GREEN_CRAYOLA: Color = Color::rgb(28, 172, 120);
pub const GREEN_WEB: Color = Color::rgb(0, 128, 0);
pub const GREEN_MUNSELL: Color = Color::rgb(0, 168, 119);
pub const GREEN_NCS: Color = Color::rgb(0, 159, 107);
pub const GREEN_PANTONE: Color = Color::rgb(0, 173, 67);
pub const GREEN_PIGMENT: Color = Color::rgb(0, 165, 80);
pub const GREEN_BLUE: Color = Color::rgb(17, 100, 180);
pub const GREEN_LIZARD: Color = Color::rgb(167, 244, 50);
pub const GREEN_SHEEN: Color = Color::rgb(110, 174, 161);
pub const GUNMETAL: Color = Color::rgb(42, 52, 57);
pub const HANSA_YELLOW: Color = Color::rgb(233, 214, 107);
pub const HARLEQUIN: Color = Color::rgb(63, 255, 0);
pub const HARVEST_GOLD: Color = Color::rgb(218, 145, 0);
pub const HEAT_WAVE: Color = Color::rgb(255, 122, 0);
pub const HELIOTROPE: Color = Color::rgb(223, 115, 255);
pub const HELIOTROPE_GRAY: Color = Color::rgb(170, 152, 169);
pub const HOLLYWOOD_CERISE: Color = Color::rgb(244, 0, 161);
pub const HONOLULU_BLUE: Color = Color::rgb(0, 109, 176);
pub const HOOKER_S_GREEN: Color = Color::rgb(73, 121, 107);
pub const HOT_MAGENTA: Color = Color::rgb(255, 29, 206);
pub const HOT_PINK: Color = Color::rgb(255, 105, 180);
pub const HUNTER_GREEN: Color = Color::rgb(53, 94, 59);
pub const ICEBERG: Color = Color::rgb(113, 166, 210);
pub const ILLUMINATING_EMERALD: Color = Color::rgb(49, 145, 119);
pub const IMPERIAL_RED: Color = Color::rgb(237, 41, 57);
pub const INCHWORM: Color = Color::rgb(178, 236, 93);
pub const INDEPENDENCE: Color = Color::rgb(76, 81, 109);
pub const INDIA_GREEN: Color = Color::rgb(19, 136, 8);
pub const INDIAN_RED: Color = Color::rgb(205, 92, 92);
pub const INDIAN_YELLOW: Color = Color::rgb(227, 168, 87);
pub const INDIGO: Color = Color::rgb(75, 0, 130);
pub const INDIGO_DYE: Color = Color::rgb(0, 65, 106);
pub const INTERNATIONAL_KLEIN_BLUE: Color = Color::rgb(19, 10, 143);
pub const INTERNATIONAL_ORANGE_ENGINEERING: Color = Color::rgb(186, 22, 12);
pub const INTERNATIONAL_ORANGE_GOLDEN_GATE_BRIDGE: Color = Color::rgb(192, 54, 44);
pub const IRRESISTIBLE: Color = Color::rgb(179, 68, 108);
pub const ISABELLINE: Color = Color::rgb(244, 240, 236);
pub const ITALIAN_SKY_BLUE: Color = Color::rgb(178, 255, 255);
pub const IVORY: Color = Color::rgb(255, 255, 240);
pub const JAPANESE_CARMINE: Color = Color::rgb(157, 41, 51);
pub const JAPANESE_VIOLET: Color = Color::rgb(91, 50, 86);
pub const JASMINE: Color = Color::rgb(248, 222, 126);
pub const JAZZBERRY_JAM: Color = Color::rgb(165, 11, 94);
pub const JET: Color = Color::rgb(52, 52, 52);
pub const JONQUIL: Color = Color::rgb(244, 202, 22);
pub const JUNE_BUD: Color = Color::rgb(189, 218, 87);
pub const JUNGLE_GREEN: Color = Color::rgb(41, 171, 135);
pub const KELLY_GREEN: Color = Color::rgb(76, 187, 23);
pub const KEPPEL: Color = Color::rgb(58, 176, 158);
pub const KEY_LIME: Color = Color::rgb(232, 244, 140);
pub const KHAKI_WEB: Color = Color::rgb(195, 176, 145);
pub const KHAKI_X11_LIGHT_KHAKI: Color = Color::rgb(240, 230, 140);
pub const KOBE: Color = Color::rgb(136, 45, 23);
pub const KOBI: Color = Color::rgb(231, 159, 196);
pub const KOBICHA: Color = Color::rgb(107, 68, 35);
pub const KSU_PURPLE: Color = Color::rgb(81, 40, 136);
pub const LANGUID_LAVENDER: Color = Color::rgb(214, 202, 221);
pub const LAPIS_LAZULI: Color = Color::rgb(38, 97, 156);
pub const LASER_LEMON: Color = Color::rgb(255, 255, 102);
pub const LAUREL_GREEN: Color = Color::rgb(169, 186, 157);
pub const LAVA: Color = Color::rgb(207, 16, 32);
pub const LAVENDER_FLORAL: Color = Color::rgb(181, 126, 220);
pub const LAVENDER_WEB: Color = Color::rgb(230, 230, 250);
pub const LAVENDER_BLUE: Color = Color::rgb(204, 204, 255);
pub const LAVENDER_BLUSH: Color = Color::rgb(255, 240, 245);
pub const LAVENDER_GRAY: Color = Color::rgb(196, 195, 208);
pub const LAWN_GREEN: Color = Color::rgb(124, 252, 0);
pub const LEMON: Color = Color::rgb(255, 247, 0);
pub const LEMON_CHIFFON: Color = Color::rgb(255, 250, 205);
pub const LEMON_CURRY: Color = Color::rgb(204, 160, 29);
pub const LEMON_GLACIER: Color = Color::rgb(253, 255, 0);
pub const LEMON_MERINGUE: Color = Color::rgb(246, 234, 190);
pub const LEMON_YELLOW: Color = Color::rgb(255, 244, 79);
pub const LEMON_YELLOW_CRAYOLA: Color = Color::rgb(255, 255, 159);
pub const LIBERTY: Color = Color::rgb(84, 90, 167);
pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
pub const LIGHT_CORAL: Color = Color::rgb(240, 128, 128);
pub const LIGHT_CORNFLOWER_BLUE: Color = Color::rgb(147, 204, 234);
pub const LIGHT_CYAN: Color = Color::rgb(224, 255, 255);
pub const LIGHT_FRENCH_BEIGE: Color = Color::rgb(200, 173, 127);
pub const LIGHT_GOLDENROD_YELLOW: Color = Color::rgb(250, 250, 210);
pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);
pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);
pub const LIGHT_ORANGE: Color = Color::rgb(254, 216, 177);
pub const LIGHT_PERIWINKLE: Color = Color::rgb(197, 203, 225);
pub const LIGHT_PINK: Color = Color::rgb(255, 182, 193);
pub const LIGHT_SALMON: Color = Color::rgb(255, 160, 122);
pub const LIGHT_SEA_GREEN: Color = Color::rgb(32, 178, 170);
pub const LIGHT_SKY_BLUE: Color = Color::rgb(135, 206, 250);
pub const LIGHT_SLATE_GRAY: Color = Color::rgb(119, 136, 153);
pub const LIGHT_STEEL_BLUE: Color = Color::rgb(176, 196, 222);
pub const LIGHT_YELLOW: Color = Color::rgb(255, 255, 224);
pub const LILAC: Color = Color::rgb(200, 162, 200);
pub const LILAC_LUSTER: Color = Color::rgb(174, 152, 170);
pub const LIME_COLOR_WHEEL: Color = Color::rgb(191, 255, 0);
pub const LIME_WEB_X11_GREEN: Color = Color::rgb(0, 255, 0);
pub const LIME_GREEN: Color = Color::rgb(50, 205, 50);
pub const LINCOLN_GREEN: Color = Color::rgb(25, 89, 5);
pub const LINEN: Color = Color::rgb(250, 240, 230);
pub const LION: Color = Color::rgb(222, 204, 156);
pub const LISERAN_PURPLE: Color = Color::rgb(222, 111, 161);
pub const LITTLE_BOY_BLUE: Color = Color::rgb(108, 160, 220);
pub const LIVER: Color = Color::rgb(103, 76, 71);
pub const LIVER_DOGS: Color = Color::rgb(184, 109, 41);
pub const LIVER_ORGAN: Color = Color::rgb(108, 46, 31);
pub const LIVER_CHESTNUT: Color = Color::rgb(152, 116, 86);
pub const LIVID: Color = Color::rgb(102, 153, 204);
pub const MACARONI_AND_CHEESE: Color = Color::rgb(255, 189, 136);
pub const MADDER_LAKE: Color = Color::rgb(204, 51, 54);
pub const MAGENTA: Color = Color::rgb(255, 0, 255);
pub const MAGENTA_CRAYOLA: Color = Color::rgb(246, 83, 166);
pub const MAGENTA_DYE: Color = Color::rgb(202, 31, 123);
pub const MAGENTA_PANTONE: Color = Color::rgb(208, 65, 126);
pub const MAGENTA_PROCESS: Color = Color::rgb(255, 0, 144);
pub const MAGENTA_HAZE: Color = Color::rgb(159, 69, 118);
pub const MAGIC_MINT: Color = Color::rgb(170, 240, 209);
pub const MAGNOLIA: Color = Color::rgb(242, 232, 215);
pub const MAHOGANY: Color = Color::rgb(192, 64, 0);
pub const MAIZE: Color = Color::rgb(251, 236, 93);
pub const MAIZE_CRAYOLA: Color = Color::rgb(242, 198, 73);
pub const MAJORELLE_BLUE: Color = Color::rgb(96, 80, 220);
pub const MALACHITE: Color = Color::rgb(11, 218, 81);
pub const MANATEE: Color = Color::rgb(151, 154, 170);
pub const MANDARIN: Color = Color::rgb(243, 122, 72);
pub const MANGO: Color = Color::rgb(253, 190, 2);
pub const MANGO_TANGO: Color = Color::rgb(255, 130, 67);
pub const MANTIS: Color = Color::rgb(116, 195, 101);
pub const MARDI_GRAS: Color = Color::rgb(136, 0, 133);
pub const MARIGOLD: Color = Color::rgb(234, 162, 33);
pub const MAROON_CRAYOLA: Color = Color::rgb(195, 33, 72);
pub const MAROON_WEB: Color = Color::rgb(128, 0, 0);
pub const MAROON_X11: Color = Color::rgb(176, 48, 96);
pub const MAUVE: Color = Color::rgb(224, 176, 255);
pub const MAUVE_TAUPE: Color = Color::rgb(145, 95, 109);
pub const MAUVELOUS: Color = Color::rgb(239, 152, 170);
pub const MAXIMUM_BLUE: Color = Color::rgb(71, 171, 204);
pub const MAXIMUM_BLUE_GREEN: Color = Color::rgb(48, 191, 191);
pub const MAXIMUM_BLUE_PURPLE: Color = Color::rgb(172, 172, 230);
pub const MAXIMUM_GREEN: Color = Color::rgb(94, 140, 49);
pub const MAXIMUM_GREEN_YELLOW: Color = Color::rgb(217, 230, 80);
pub const MAXIMUM_PURPLE: Color = Color::rgb(115, 51, 128);
pub const MAXIMUM_RED: Color = Color::rgb(217, 33, 33);
pub const MAXIMUM_RED_PURPLE: Color = Color::rgb(166, 58, 121);
pub const MAXIMUM_YELLOW: Color = Color::rgb(250, 250, 55);
pub const MAXIMUM_YELLOW_RED: Color = Color::rgb(242, 186, 73);
pub const MAY_GREEN: Color = Color::rgb(76, 145, 65);
pub const MAYA_BLUE: Color = Color::rgb(115, 194, 251);
pub const MEDIUM_AQUAMARINE: Color = Color::rgb(102, 221, 170);
pub const MEDIUM_BLUE: Color = Color::rgb(0, 0, 205);
pub const MEDIUM_CANDY_APPLE_RED: Color = Color::rgb(226, 6, 44);
pub const MEDIUM_CARMINE: Color = Color::rgb(175, 64, 53);
pub const MEDIUM_CHAMPAGNE: Color = Color::rgb(243, 229, 171);
pub const MEDIUM_ORCHID: Color = Color::rgb(186, 85, 211);
pub const MEDIUM_PURPLE: Color = Color::rgb(147, 112, 219);
pub const MEDIUM_SEA_GREEN: Color = Color::rgb(60, 179, 113);
pub const MEDIUM_SLATE_BLUE: Color = Color::rgb(123, 104, 238);
pub const MEDIUM_SPRING_GREEN: Color = Color::rgb(0, 250, 154);
pub const MEDIUM_TURQUOISE: Color = Color::rgb(72, 209, 204);
pub const MEDIUM_VIOLET_RED: Color = Color::rgb(199, 21, 133);
pub const MELLOW_APRICOT: Color = Color::rgb(248, 184, 120);
pub const MELLOW_YELLOW: Color = Color::rgb(248, 222, 126);
pub const MELON: Color = Color::rgb(254, 186, 173);
pub const METALLIC_GOLD: Color = Color::rgb(211, 175, 55);
pub const METALLIC_SEAWEED: Color = Color::rgb(10, 126, 140);
pub const METALLIC_SUNBURST: Color = Color::rgb(156, 124, 56);
pub const MEXICAN_PINK: Color = Color::rgb(228, 0, 124);
pub const MIDDLE_BLUE: Color = Color::rgb(126, 212, 230);
pub const MIDDLE_BLUE_GREEN: Color = Color::rgb(141, 217, 204);
pub const MIDDLE_BLUE_PURPLE: Color = Color::rgb(139, 114, 190);
pub const MIDDLE_GREY: Color = Color::rgb(139, 134, 128);
pub const MIDDLE_GREEN: Color = Color::rgb(77, 140, 87);
pub const MIDDLE_GREEN_YELLOW: Color = Color::rgb(172, 191, 96);
pub const MIDDLE_PURPLE: Color = Color::rgb(217, 130, 181);
pub const MIDDLE_RED: Color = Color::rgb(229, 142, 115);
pub const MIDDLE_RED_PURPLE: Color = Color::rgb(165, 83, 83);
pub const MIDDLE_YELLOW: Color = Color::rgb(255, 235, 0);
pub const MIDDLE_YELLOW_RED: Color = Color::rgb(236, 177, 118);
pub const MIDNIGHT: Color = Color::rgb(112, 38, 112);
pub const MIDNIGHT_BLUE: Color = Color::rgb(25, 25, 112);
pub const MIDNIGHT_GREEN_EAGLE_GREEN: Color = Color::rgb(0, 73, 83);
pub const MIKADO_YELLOW: Color = Color::rgb(255, 196, 12);
pub const MIMI_PINK: Color = Color::rgb(255, 218, 233);
pub const MINDARO: Color = Color::rgb(227, 249, 136);
pub const MING: Color = Color::rgb(54, 116, 125);
pub const MINION_YELLOW: Color = Color::rgb(245, 224, 80);
pub const MINT: Color = Color::rgb(62, 180, 137);
pub const MINT_CREAM: Color = Color::rgb(245, 255, 250);
pub const MINT_GREEN: Color = Color::rgb(152, 255, 152);
pub const MISTY_MOSS: Color = Color::rgb(187, 180, 119);
pub const MISTY_ROSE: Color = Color::rgb(255, 228, 225);
pub const MODE_BEIGE: Color = Color::rgb(150, 113, 23);
pub const MONA_LISA: Color = Color::rgb(255, 148, 142);
pub const MORNING_BLUE: Color = Color::rgb(141, 163, 153);
pub const MOSS_GREEN: Color = Color::rgb(138, 154, 91);
pub const MOUNTAIN_MEADOW: Color = Color::rgb(48, 186, 143);
pub const MOUNTBATTEN_PINK: Color = Color::rgb(153, 122, 141);
pub const MSU_GREEN: Color = Color::rgb(24, 69, 59);
pub const MULBERRY: Color = Color::rgb(197, 75, 140);
pub const MULBERRY_CRAYOLA: Color = Color::rgb(200, 80, 155);
pub const MUSTARD: Color = Color::rgb(255, 219, 88);
pub const MYRTLE_GREEN: Color = Color::rgb(49, 120, 115);
pub const MYSTIC: Color = Color::rgb(214, 82, 130);
pub const MYSTIC_MAROON: Color = Color::rgb(173, 67, 121);
pub const NADESHIKO_PINK: Color = Color::rgb(246, 173, 198);
pub const NAPLES_YELLOW: Color = Color::rgb(250, 218, 94);
pub const NAVAJO_WHITE: Color = Color::rgb(255, 222, 173);
pub const NAVY_BLUE: Color = Color::rgb(0, 0, 128);
pub const NAVY_BLUE_CRAYOLA: Color = Color::rgb(25, 116, 210);
pub const NEON_BLUE: Color = Color::rgb(70, 102, 255);
pub const NEON_GREEN: Color = Color::rgb(57, 255, 20);
pub const NEON_FUCHSIA: Color = Color::rgb(254, 65, 100);
pub const NEW_CAR: Color = Color::rgb(33, 79, 198);
pub const NEW_YORK_PINK: Color = Color::rgb(215, 131, 127);
pub const NICKEL: Color = Color::rgb(114, 116, 114);
pub const NON_PHOTO_BLUE: Color = Color::rgb(164, 221, 237);
pub const NYANZA: Color = Color::rgb(233, 255, 219);
pub const OCHRE: Color = Color::rgb(204, 119, 34);
pub const OLD_BURGUNDY: Color = Color::rgb(67, 48, 46);
pub const OLD_GOLD: Color = Color::rgb(207, 181, 59);
pub const OLD_LACE: Color = Color::rgb(253, 245, 230);
pub const OLD_LAVENDER: Color = Color::rgb(121, 104, 120);
pub const OLD_MAUVE: Color = Color::rgb(103, 49, 71);
pub const OLD_ROSE: Color = Color::rgb(192, 128, 129);
pub const OLD_SILVER: Color = Color::rgb(132, 132, 130);
pub const OLIVE: Color = Color::rgb(128, 128, 0);
pub const OLIVE_DRAB3: Color = Color::rgb(107, 142, 35);
pub const OLIVE_DRAB7: Color = Color::rgb(60, 52, 31);
pub const OLIVE_GREEN: Color = Color::rgb(181, 179, 92);
pub const OLIVINE: Color = Color::rgb(154, 185, 115);
pub const ONYX: Color = Color::rgb(53, 56, 57);
pub const OPAL: Color = Color::rgb(168, 195, 188);
pub const OPERA_MAUVE: Color = Color::rgb(183, 132, 167);
pub const ORANGE: Color = Color::rgb(255, 127, 0);
pub const ORANGE_CRAYOLA: Color = Color::rgb(255, 117, 56);
pub const ORANGE_PANTONE: Color = Color::rgb(255, 88, 0);
pub const ORANGE_WEB: Color = Color::rgb(255, 165, 0);
pub const ORANGE_PEEL: Color = Color::rgb(255, 159, 0);
pub const ORANGE_RED: Color = Color::rgb(255, 104, 31);
pub const ORANGE_RED_CRAYOLA: Color = Color::rgb(255, 83, 73);
pub const ORANGE_SODA: Color = Color::rgb(250, 91, 61);
pub const ORANGE_YELLOW: Color = Color::rgb(245, 189, 31);
pub const ORANGE_YELLOW_CRAYOLA: Color = Color::rgb(248, 213, 104);
pub const ORCHID: Color = Color::rgb(218, 112, 214);
pub const ORCHID_PINK: Color = Color::rgb(242, 189, 205);
pub const ORCHID_CRAYOLA: Color = Color::rgb(226, 156, 210);
pub const OUTER_SPACE_CRAYOLA: Color = Color::rgb(45, 56, 58);
pub const OUTRAGEOUS_ORANGE: Color = Color::rgb(255, 110, 74);
pub const OXBLOOD: Color = Color::rgb(74, 0, 0);
pub const OXFORD_BLUE: Color = Color::rgb(0, 33, 71);
pub const OU_CRIMSON_RED: Color = Color::rgb(132, 22, 23);
pub const PACIFIC_BLUE: Color = Color::rgb(28, 169, 201);
pub const PAKISTAN_GREEN: Color = Color::rgb(0, 102, 0);
pub const PALATINATE_PURPLE: Color = Color::rgb(104, 40, 96);
pub const PALE_AQUA: Color = Color::rgb(190, 211, 229);
pub const PALE_CERULEAN: Color = Color::rgb(155, 196, 226);
pub const PALE_DOGWOOD: Color = Color::rgb(237, 122, 155);
pub const PALE_PINK: Color = Color::rgb(250, 218, 221);
pub const PALE_PURPLE_PANTONE: Color = Color::rgb(250, 230, 250);
pub const PALE_SPRING_BUD: Color = Color::rgb(236, 235, 189);
pub const PANSY_PURPLE: Color = Color::rgb(120, 24, 74);
pub const PAOLO_VERONESE_GREEN: Color = Color::rgb(0, 155, 125);
pub const PAPAYA_WHIP: Color = Color::rgb(255, 239, 213);
pub const PARADISE_PINK: Color = Color::rgb(230, 62, 98);
pub const PARCHMENT: Color = Color::rgb(241, 233, 210);
pub const PARIS_GREEN: Color = Color::rgb(80, 200, 120);
pub const PASTEL_PINK: Color = Color::rgb(222, 165, 164);
pub const PATRIARCH: Color = Color::rgb(128, 0, 128);
pub const PAUA: Color = Color::rgb(31, 0, 94);
pub const PAYNE_S_GREY: Color = Color::rgb(83, 104, 120);
pub const PEACH: Color = Color::rgb(255, 229, 180);
pub const PEACH_CRAYOLA: Color = Color::rgb(255, 203, 164);
pub const PEACH_PUFF: Color = Color::rgb(255, 218, 185);
pub const PEAR: Color = Color::rgb(209, 226, 49);
pub const PEARLY_PURPLE: Color = Color::rgb(183, 104, 162);
pub const PERIWINKLE: Color = Color::rgb(204, 204, 255);
pub const PERIWINKLE_CRAYOLA: Color = Color::rgb(195, 205, 230);
pub const PERMANENT_GERANIUM_LAKE: Color = Color::rgb(225, 44, 44);
pub const PERSIAN_BLUE: Color = Color::rgb(28, 57, 187);
pub const PERSIAN_GREEN: Color = Color::rgb(0, 166, 147);
pub const PERSIAN_INDIGO: Color = Color::rgb(50, 18, 122);
pub const PERSIAN_ORANGE: Color = Color::rgb(217, 144, 88);
pub const PERSIAN_PINK: Color = Color::rgb(247, 127, 190);
pub const PERSIAN_PLUM: Color = Color::rgb(112, 28, 28);
pub const PERSIAN_RED: Color = Color::rgb(204, 51, 51);
pub const PERSIAN_ROSE: Color = Color::rgb(254, 40, 162);
pub const PERSIMMON: Color = Color::rgb(236, 88, 0);
pub const PEWTER_BLUE: Color = Color::rgb(139, 168, 183);
pub const PHLOX: Color = Color::rgb(223, 0, 255);
pub const PHTHALO_BLUE: Color = Color::rgb(0, 15, 137);
pub const PHTHALO_GREEN: Color = Color::rgb(18, 53, 36);
pub const PICOTEE_BLUE: Color = Color::rgb(46, 39, 135);
pub const PICTORIAL_CARMINE: Color = Color::rgb(195, 11, 78);
pub const PIGGY_PINK: Color = Color::rgb(253, 221, 230);
pub const PINE_GREEN: Color = Color::rgb(1, 121, 111);
pub const PINE_TREE: Color = Color::rgb(42, 47, 35);
pub const PINK: Color = Color::rgb(255, 192, 203);
pub const PINK_PANTONE: Color = Color::rgb(215, 72, 148);
pub const PINK_LACE: Color = Color::rgb(255, 221, 244);
pub const PINK_LAVENDER: Color = Color::rgb(216, 178, 209);
pub const PINK_SHERBET: Color = Color::rgb(247, 143, 167);
pub const PISTACHIO: Color = Color::rgb(147, 197, 114);
pub const PLATINUM: Color = Color::rgb(229, 228, 226);
pub const PLUM: Color = Color::rgb(142, 69, 133);
pub const PLUM_WEB: Color = Color::rgb(221, 160, 221);
pub const PLUMP_PURPLE: Color = Color::rgb(89, 70, 178);
pub const POLISHED_PINE: Color = Color::rgb(93, 164, 147);
pub const POMP_AND_POWER: Color = Color::rgb(134, 96, 142);
pub const POPSTAR: Color = Color::rgb(190, 79, 98);
pub const PORTLAND_ORANGE: Color = Color::rgb(255, 90, 54);
pub const POWDER_BLUE: Color = Color::rgb(176, 224, 230);
pub const PRAIRIE_GOLD: Color = Color::rgb(225, 202, 122);
pub const PRINCETON_ORANGE: Color = Color::rgb(245, 128, 37);
pub const PROCESS_YELLOW: Color = Color::rgb(255, 239, 0);
pub const PRUNE: Color = Color::rgb(112, 28, 28);
pub const PRUSSIAN_BLUE: Color = Color::rgb(0, 49, 83);
pub const PSYCHEDELIC_PURPLE: Color = Color::rgb(223, 0, 255);
pub const PUCE: Color = Color::rgb(204, 136, 153);
pub const PULLMAN_BROWN_UPS_BROWN: Color = Color::rgb(100, 65, 23);
pub const PUMPKIN: Color = Color::rgb(255, 117, 24);
pub const PURPLE: Color = Color::rgb(106, 13, 173);
pub const PURPLE_WEB: Color = Color::rgb(128, 0, 128);
pub const PURPLE_MUNSELL: Color = Color::rgb(159, 0, 197);
pub const PURPLE_X11: Color = Color::rgb(160, 32, 240);
pub const PURPLE_MOUNTAIN_MAJESTY: Color = Color::rgb(150, 120, 182);
pub const PURPLE_NAVY: Color = Color::rgb(78, 81, 128);
pub const PURPLE_PIZZAZZ: Color = Color::rgb(254, 78, 218);
pub const PURPLE_PLUM: Color = Color::rgb(156, 81, 182);
pub const PURPUREUS: Color = Color::rgb(154, 78, 174);
pub const QUEEN_BLUE: Color = Color::rgb(67, 107, 149);
pub const QUEEN_PINK: Color = Color::rgb(232, 204, 215);
pub const QUICK_SILVER: Color = Color::rgb(166, 166, 166);
pub const QUINACRIDONE_MAGENTA: Color = Color::rgb(142, 58, 89);
pub const RADICAL_RED: Color = Color::rgb(255, 53, 94);
pub const RAISIN_BLACK: Color = Color::rgb(36, 33, 36);
pub const RAJAH: Color = Color::rgb(251, 171, 96);
pub const RASPBERRY: Color = Color::rgb(227, 11, 93);
pub const RASPBERRY_GLACE: Color = Color::rgb(145, 95, 109);
pub const RASPBERRY_ROSE: Color = Color::rgb(179, 68, 108);
pub const RAW_SIENNA: Color = Color::rgb(214, 138, 89);
pub const RAW_UMBER: Color = Color::rgb(130, 102, 68);
pub const RAZZLE_DAZZLE_ROSE: Color = Color::rgb(255, 51, 204);
pub const RAZZMATAZZ: Color = Color::rgb(227, 37, 107);
pub const RAZZMIC_BERRY: Color = Color::rgb(141, 78, 133);
pub const REBECCA_PURPLE: Color = Color::rgb(102, 51, 153);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const RED_CRAYOLA: Color = Color::rgb(238, 32, 77);
pub const RED_MUNSELL: Color = Color::rgb(242, 0, 60);
pub const RED_NCS: Color = Color::rgb(196, 2, 51);
pub const RED_PANTONE: Color = Color::rgb(237, 41, 57);
pub const RED_PIGMENT: Color = Color::rgb(237, 28, 36);
pub const RED_RYB: Color = Color::rgb(254, 39, 18);
pub const RED_ORANGE: Color = Color::rgb(255, 83, 73);
pub const RED_ORANGE_CRAYOLA: Color = Color::rgb(255, 104, 31);
pub const RED_ORANGE_COLOR_WHEEL: Color = Color::rgb(255, 69, 0);
pub const RED_PURPLE: Color = Color::rgb(228, 0, 120);
pub const RED_SALSA: Color = Color::rgb(253, 58, 74);
pub const RED_VIOLET: Color = Color::rgb(199, 21, 133);
pub const RED_VIOLET_CRAYOLA: Color = Color::rgb(192, 68, 143);
pub const RED_VIOLET_COLOR_WHEEL: Color = Color::rgb(146, 43, 62);
pub const REDWOOD: Color = Color::rgb(164, 90, 82);
pub const RESOLUTION_BLUE: Color = Color::rgb(0, 35, 135);
pub const RHYTHM: Color = Color::rgb(119, 118, 150);
pub const RICH_BLACK: Color = Color::rgb(0, 64, 64);
pub const RICH_BLACK_FOGRA29: Color = Color::rgb(1, 11, 19);
pub const RICH_BLACK_FOGRA39: Color = Color::rgb(1, 2, 3);
pub const RIFLE_GREEN: Color = Color::rgb(68, 76, 56);
pub const ROBIN_EGG_BLUE: Color = Color::rgb(0, 204, 204);
pub const ROCKET_METALLIC: Color = Color::rgb(138, 127, 128);
pub const ROJO_SPANISH_RED: Color = Color::rgb(169, 17, 1);
pub const ROMAN_SILVER: Color = Color::rgb(131, 137, 150);
pub const ROSE: Color = Color::rgb(255, 0, 127);
pub const ROSE_BONBON: Color = Color::rgb(249, 66, 158);
pub const ROSE_DUST: Color = Color::rgb(158, 94, 111);
pub const ROSE_EBONY: Color = Color::rgb(103, 72, 70);
pub const ROSE_MADDER: Color = Color::rgb(227, 38, 54);
pub const ROSE_PINK: Color = Color::rgb(255, 102, 204);
pub const ROSE_POMPADOUR: Color = Color::rgb(237, 122, 155);
pub const ROSE_RED: Color = Color::rgb(194, 30, 86);
pub const ROSE_TAUPE: Color = Color::rgb(144, 93, 93);
pub const ROSE_VALE: Color = Color::rgb(171, 78, 82);
pub const ROSEWOOD: Color = Color::rgb(101, 0, 11);
pub const ROSSO_CORSA: Color = Color::rgb(212, 0, 0);
pub const ROSY_BROWN: Color = Color::rgb(188, 143, 143);
pub const ROYAL_BLUE_DARK: Color = Color::rgb(0, 35, 102);
pub const ROYAL_BLUE_LIGHT: Color = Color::rgb(65, 105, 225);
pub const ROYAL_PURPLE: Color = Color::rgb(120, 81, 169);
pub const ROYAL_YELLOW: Color = Color::rgb(250, 218, 94);
pub const RUBER: Color = Color::rgb(206, 70, 118);
pub const RUBINE_RED: Color = Color::rgb(209, 0, 86);
pub const RUBY: Color = Color::rgb(224, 17, 95);
pub const RUBY_RED: Color = Color::rgb(155, 17, 30);
pub const RUFOUS: Color = Color::rgb(168, 28, 7);
pub const RUSSET: Color = Color::rgb(128, 70, 27);
pub const RUSSIAN_GREEN: Color = Color::rgb(103, 146, 103);
pub const RUSSIAN_VIOLET: Color = Color::rgb(50, 23, 77);
pub const RUST: Color = Color::rgb(183, 65, 14);
pub const RUSTY_RED: Color = Color::rgb(218, 44, 67);
pub const SACRAMENTO_STATE_GREEN: Color = Color::rgb(4, 57, 39);
pub const SADDLE_BROWN: Color = Color::rgb(139, 69, 19);
pub const SAFETY_ORANGE: Color = Color::rgb(255, 120, 0);
pub const SAFETY_ORANGE_BLAZE_ORANGE: Color = Color::rgb(255, 103, 0);
pub const SAFETY_YELLOW: Color = Color::rgb(238, 210, 2);
pub const SAFFRON: Color = Color::rgb(244, 196, 48);
pub const SAGE: Color = Color::rgb(188, 184, 138);
pub const ST_PATRICK_S_BLUE: Color = Color::rgb(35, 41, 122);
pub const SALMON: Color = Color::rgb(250, 128, 114);
pub const SALMON_PINK: Color = Color::rgb(255, 145, 164);
pub const SAND: Color = Color::rgb(194, 178, 128);
pub const SAND_DUNE: Color = Color::rgb(150, 113, 23);
pub const SANDY_BROWN: Color = Color::rgb(244, 164, 96);
pub const SAP_GREEN: Color = Color::rgb(80, 125, 42);
pub const SAPPHIRE: Color = Color::rgb(15, 82, 186);
pub const SAPPHIRE_BLUE: Color = Color::rgb(0, 103, 165);
pub const SAPPHIRE_CRAYOLA: Color = Color::rgb(45, 93, 161);
pub const SATIN_SHEEN_GOLD: Color = Color::rgb(203, 161, 53);
pub const SCARLET: Color = Color::rgb(255, 36, 0);
pub const SCHAUSS_PINK: Color = Color::rgb(255, 145, 175);
pub const SCHOOL_BUS_YELLOW: Color = Color::rgb(255, 216, 0);
pub const SCREAMIN_GREEN: Color = Color::rgb(102, 255, 102);
pub const SEA_GREEN: Color = Color::rgb(46, 139, 87);
pub const SEA_GREEN_CRAYOLA: Color = Color::rgb(0, 255, 205);
pub const SEANCE: Color = Color::rgb(97, 32, 134);
pub const SEAL_BROWN: Color = Color::rgb(89, 38, 11);
pub const SEASHELL: Color = Color::rgb(255, 245, 238);
pub const SECRET: Color = Color::rgb(118, 67, 116);
pub const SELECTIVE_YELLOW: Color = Color::rgb(255, 186, 0);
pub const SEPIA: Color = Color::rgb(112, 66, 20);
pub const SHADOW: Color = Color::rgb(138, 121, 93);
pub const SHADOW_BLUE: Color = Color::rgb(119, 139, 165);
pub const SHAMROCK_GREEN: Color = Color::rgb(0, 158, 96);
pub const SHEEN_GREEN: Color = Color::rgb(143, 212, 0);
pub const SHIMMERING_BLUSH: Color = Color::rgb(217, 134, 149);
pub const SHINY_SHAMROCK: Color = Color::rgb(95, 167, 120);
pub const SHOCKING_PINK: Color = Color::rgb(252, 15, 192);
pub const SHOCKING_PINK_CRAYOLA: Color = Color::rgb(255, 111, 255);
pub const SIENNA: Color = Color::rgb(136, 45, 23);
pub const SILVER: Color = Color::rgb(192, 192, 192);
pub const SILVER_CRAYOLA: Color = Color::rgb(201, 192, 187);
pub const SILVER_METALLIC: Color = Color::rgb(170, 169, 173);
pub const SILVER_CHALICE: Color = Color::rgb(172, 172, 172);
pub const SILVER_PINK: Color = Color::rgb(196, 174, 173);
pub const SILVER_SAND: Color = Color::rgb(191, 193, 194);
pub const SINOPIA: Color = Color::rgb(203, 65, 11);
pub const SIZZLING_RED: Color = Color::rgb(255, 56, 85);
pub const SIZZLING_SUNRISE: Color = Color::rgb(255, 219, 0);
pub const SKOBELOFF: Color = Color::rgb(0, 116, 116);
pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);
pub const SKY_BLUE_CRAYOLA: Color = Color::rgb(118, 215, 234);
pub const SKY_MAGENTA: Color = Color::rgb(207, 113, 175);
pub const SLATE_BLUE: Color = Color::rgb(106, 90, 205);
pub const SLATE_GRAY: Color = Color::rgb(112, 128, 144);
pub const SLIMY_GREEN: Color = Color::rgb(41, 150, 23);
pub const SMITTEN: Color = Color::rgb(200, 65, 134);
pub const SMOKY_BLACK: Color = Color::rgb(16, 12, 8);
pub const SNOW: Color = Color::rgb(255, 250, 250);
pub const SOLID_PINK: Color = Color::rgb(137, 56, 67);
pub const SONIC_SILVER: Color = Color::rgb(117, 117, 117);
pub const SPACE_CADET: Color = Color::rgb(29, 41, 81);
pub const SPANISH_BISTRE: Color = Color::rgb(128, 117, 50);
pub const SPANISH_BLUE: Color = Color::rgb(0, 112, 184);
pub const SPANISH_CARMINE: Color = Color::rgb(209, 0, 71);
pub const SPANISH_GRAY: Color = Color::rgb(152, 152, 152);
pub const SPANISH_GREEN: Color = Color::rgb(0, 145, 80);
pub const SPANISH_ORANGE: Color = Color::rgb(232, 97, 0);
pub const SPANISH_PINK: Color = Color::rgb(247, 191, 190);
pub const SPANISH_RED: Color = Color::rgb(230, 0, 38);
pub const SPANISH_SKY_BLUE: Color = Color::rgb(0, 255, 254);
pub const SPANISH_VIOLET: Color = Color::rgb(76, 40, 130);
pub const SPANISH_VIRIDIAN: Color = Color::rgb(0, 127, 92);
pub const SPRING_BUD: Color = Color::rgb(167, 252, 0);
pub const SPRING_FROST: Color = Color::rgb(135, 255, 42);
pub const SPRING_GREEN: Color = Color::rgb(0, 255, 127);
pub const SPRING_GREEN_CRAYOLA: Color = Color::rgb(236, 235, 189);
pub const STAR_COMMAND_BLUE: Color = Color::rgb(0, 123, 184);
pub const STEEL_BLUE: Color = Color::rgb(70, 130, 180);
pub const STEEL_PINK: Color = Color::rgb(204, 51, 204);
pub const STIL_DE_GRAIN_YELLOW: Color = Color::rgb(250, 218, 94);
pub const STRAW: Color = Color::rgb(228, 217, 111);
pub const STRAWBERRY: Color = Color::rgb(250, 80, 83);
pub const STRAWBERRY_BLONDE: Color = Color::rgb(255, 147, 97);
pub const STRONG_LIME_GREEN: Color = Color::rgb(51, 204, 51);
pub const SUGAR_PLUM: Color = Color::rgb(145, 78, 117);
pub const SUNGLOW: Color = Color::rgb(255, 204, 51);
pub const SUNRAY: Color = Color::rgb(227, 171, 87);
pub const SUNSET: Color = Color::rgb(250, 214, 165);
pub const SUPER_PINK: Color = Color::rgb(207, 107, 169);
pub const SWEET_BROWN: Color = Color::rgb(168, 55, 49);
pub const SYRACUSE_ORANGE: Color = Color::rgb(212, 69, 0);
pub const TAN: Color = Color::rgb(210, 180, 140);
pub const TAN_CRAYOLA: Color = Color::rgb(217, 154, 108);
pub const TANGERINE: Color = Color::rgb(242, 133, 0);
pub const TANGO_PINK: Color = Color::rgb(228, 113, 122);
pub const TART_ORANGE: Color = Color::rgb(251, 77, 70);
pub const TAUPE: Color = Color::rgb(72, 60, 50);
pub const TAUPE_GRAY: Color = Color::rgb(139, 133, 137);
pub const TEA_GREEN: Color = Color::rgb(208, 240, 192);
pub const TEA_ROSE: Color = Color::rgb(244, 194, 194);
pub const TEAL: Color = Color::rgb(0, 128, 128);
pub const TEAL_BLUE: Color = Color::rgb(54, 117, 136);
pub const TECHNOBOTANICA: Color = Color::rgb(0, 255, 191);
pub const TELEMAGENTA: Color = Color::rgb(207, 52, 118);
pub const TAWNY: Color = Color::rgb(205, 87, 0);
pub const TERRA_COTTA: Color = Color::rgb(226, 114, 91);
pub const THISTLE: Color = Color::rgb(216, 191, 216);
pub const THULIAN_PINK: Color = Color::rgb(222, 111, 161);
pub const TICKLE_ME_PINK: Color = Color::rgb(252, 137, 172);
pub const TIFFANY_BLUE: Color = Color::rgb(10, 186, 181);
pub const TIMBERWOLF: Color = Color::rgb(219, 215, 210);
pub const TITANIUM_YELLOW: Color = Color::rgb(238, 230, 0);
pub const TOMATO: Color = Color::rgb(255, 99, 71);
pub const TOURMALINE: Color = Color::rgb(134, 161, 169);
pub const TROPICAL_RAINFOREST: Color = Color::rgb(0, 117, 94);
pub const TRUE_BLUE: Color = Color::rgb(45, 104, 196);
pub const TRYPAN_BLUE: Color = Color::rgb(28, 5, 179);
pub const TUFTS_BLUE: Color = Color::rgb(62, 142, 222);
pub const TUMBLEWEED: Color = Color::rgb(222, 170, 136);
pub const TURQUOISE: Color = Color::rgb(64, 224, 208);
pub const TURQUOISE_BLUE: Color = Color::rgb(0, 255, 239);
pub const TURQUOISE_GREEN: Color = Color::rgb(160, 214, 180);
pub const TURTLE_GREEN: Color = Color::rgb(138, 154, 91);
pub const TUSCAN: Color = Color::rgb(250, 214, 165);
pub const TUSCAN_BROWN: Color = Color::rgb(111, 78, 55);
pub const TUSCAN_RED: Color = Color::rgb(124, 72, 72);
pub const TUSCAN_TAN: Color = Color::rgb(166, 123, 91);
pub const TUSCANY: Color = Color::rgb(192, 153, 153);
pub const TWILIGHT_LAVENDER: Color = Color::rgb(138, 73, 107);
pub const TYRIAN_PURPLE: Color = Color::rgb(102, 2, 60);
pub const UA_BLUE: Color = Color::rgb(0, 51, 170);
pub const UA_RED: Color = Color::rgb(217, 0, 76);
pub const ULTRAMARINE: Color = Color::rgb(63, 0, 255);
pub const ULTRAMARINE_BLUE: Color = Color::rgb(65, 102, 245);
pub const ULTRA_PINK: Color = Color::rgb(255, 111, 255);
pub const ULTRA_RED: Color = Color::rgb(252, 108, 133);
pub const UMBER: Color = Color::rgb(99, 81, 71);
pub const UNBLEACHED_SILK: Color = Color::rgb(255, 221, 202);
pub const UNITED_NATIONS_BLUE: Color = Color::rgb(0, 158, 219);
pub const UNIVERSITY_OF_PENNSYLVANIA_RED: Color = Color::rgb(165, 0, 33);
pub const UNMELLOW_YELLOW: Color = Color::rgb(255, 255, 102);
pub const UP_FOREST_GREEN: Color = Color::rgb(1, 68, 33);
pub const UP_MAROON: Color = Color::rgb(123, 17, 19);
pub const UPSDELL_RED: Color = Color::rgb(174, 32, 41);
pub const URANIAN_BLUE: Color = Color::rgb(175, 219, 245);
pub const USAFA_BLUE: Color = Color::rgb(0, 79, 152);
pub const VAN_DYKE_BROWN: Color = Color::rgb(102, 66, 40);
pub const VANILLA: Color = Color::rgb(243, 229, 171);
pub const VANILLA_ICE: Color = Color::rgb(243, 143, 169);
pub const VEGAS_GOLD: Color = Color::rgb(197, 179, 88);
pub const VENETIAN_RED: Color = Color::rgb(200, 8, 21);
pub const VERDIGRIS: Color = Color::rgb(67, 179, 174);
pub const VERMILION: Color = Color::rgb(227, 66, 52);
pub const VERONICA: Color = Color::rgb(160, 32, 240);
pub const VIOLET: Color = Color::rgb(143, 0, 255);
pub const VIOLET_COLOR_WHEEL: Color = Color::rgb(127, 0, 255);
pub const VIOLET_CRAYOLA: Color = Color::rgb(150, 61, 127);
pub const VIOLET_RYB: Color = Color::rgb(134, 1, 175);
pub const VIOLET_WEB: Color = Color::rgb(238, 130, 238);
pub const VIOLET_BLUE: Color = Color::rgb(50, 74, 178);
pub const VIOLET_BLUE_CRAYOLA: Color = Color::rgb(118, 110, 200);
pub const VIOLET_RED: Color = Color::rgb(247, 83, 148);
pub const VIOLET_RED_PERBANG: Color = Color::rgb(240, 89, 156);
pub const VIRIDIAN: Color = Color::rgb(64, 130, 109);
pub const VIRIDIAN_GREEN: Color = Color::rgb(0, 150, 152);
pub const VIVID_BURGUNDY: Color = Color::rgb(159, 29, 53);
pub const VIVID_SKY_BLUE: Color = Color::rgb(0, 204, 255);
pub const VIVID_TANGERINE: Color = Color::rgb(255, 160, 137);
pub const VIVID_VIOLET: Color = Color::rgb(159, 0, 255);
pub const VOLT: Color = Color::rgb(206, 255, 0);
pub const WARM_BLACK: Color = Color::rgb(0, 66, 66);
pub const WEEZY_BLUE: Color = Color::rgb(24, 155, 204);
pub const WHEAT: Color = Color::rgb(245, 222, 179);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const WILD_BLUE_YONDER: Color = Color::rgb(162, 173, 208);
pub const WILD_ORCHID: Color = Color::rgb(212, 112, 162);
pub const WILD_STRAWBERRY: Color = Color::rgb(255, 67, 164);
pub const WILD_WATERMELON: Color = Color::rgb(252, 108, 133);
pub const WINDSOR_TAN: Color = Color::rgb(167, 85, 2);
pub const WINE: Color = Color::rgb(114, 47, 55);
pub const WINE_DREGS: Color = Color::rgb(103, 49, 71);
pub const WINTER_SKY: Color = Color::rgb(255, 0, 124);
pub const WINTERGREEN_DREAM: Color = Color::rgb(86, 136, 125);
pub const WISTERIA: Color = Color::rgb(201, 160, 220);
pub const WOOD_BROWN: Color = Color::rgb(193, 154, 107);
pub const XANADU: Color = Color::rgb(115, 134, 120);
pub const XANTHIC: Color = Color::rgb(238, 237, 9);
pub const XANTHOUS: Color = Color::rgb(241, 180, 47);
pub const YALE_BLUE: Color = Color::rgb(0, 53, 107);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const YELLOW_CRAYOLA: Color = Color::rgb(252, 232, 131);
pub const YELLOW_MUNSELL: Color = Color::rgb(239, 204, 0);
pub const YELLOW_NCS: Color = Color::rgb(255, 211, 0);
pub const YELLOW_PANTONE: Color = Color::rgb(254, 223, 0);
pub const YELLOW_PROCESS: Color = Color::rgb(255, 239, 0);
pub const YELLOW_RYB: Color = Color::rgb(254, 254, 51);
pub const YELLOW_GREEN: Color = Color::rgb(154, 205, 50);
pub const YELLOW_GREEN_CRAYOLA: Color = Color::rgb(197, 227, 132);
pub const YELLOW_GREEN_COLOR_WHEEL: Color = Color::rgb(48, 178, 26);
pub const YELLOW_ORANGE: Color = Color::rgb(255, 174, 66);
pub const YELLOW_ORANGE_COLOR_WHEEL: Color = Color::rgb(255, 149, 5);
pub const YELLOW_SUNSHINE: Color = Color::rgb(255, 247, 0);
pub const YINMN_BLUE: Color = Color::rgb(46, 80, 144);
pub const ZAFFRE: Color = Color::rgb(0, 20, 168);
pub const ZINNWALDITE_BROWN: Color = Color::rgb(44, 22, 8);
pub const ZOMP: Color = Color::rgb(57, 167, 142);

/// Every named color with its display name.
pub static ALL: &[(&str, Color)] = &[
    ("Absolute Zero", ABSOLUTE_ZERO),
    ("Acid Green", ACID_GREEN),
    ("Aero", AERO),
    ("African Violet", AFRICAN_VIOLET),
    ("Air Superiority Blue", AIR_SUPERIORITY_BLUE),
    ("Alice Blue", ALICE_BLUE),
    ("Alizarin", ALIZARIN),
    ("Alloy Orange", ALLOY_ORANGE),
    ("Almond", ALMOND),
    ("Amaranth Deep Purple", AMARANTH_DEEP_PURPLE),
    ("Amaranth Pink", AMARANTH_PINK),
    ("Amaranth Purple", AMARANTH_PURPLE),
    ("Amazon", AMAZON),
    ("Amber", AMBER),
    ("Amethyst", AMETHYST),
    ("Android Green", ANDROID_GREEN),
    ("Antique Brass", ANTIQUE_BRASS),
    ("Antique Bronze", ANTIQUE_BRONZE),
    ("Antique Fuchsia", ANTIQUE_FUCHSIA),
    ("Antique Ruby", ANTIQUE_RUBY),
    ("Antique White", ANTIQUE_WHITE),
    ("Apricot", APRICOT),
    ("Aqua", AQUA),
    ("Aquamarine", AQUAMARINE),
    ("Arctic Lime", ARCTIC_LIME),
    ("Artichoke Green", ARTICHOKE_GREEN),
    ("Arylide Yellow", ARYLIDE_YELLOW),
    ("Ash Gray", ASH_GRAY),
    ("Atomic Tangerine", ATOMIC_TANGERINE),
    ("Aureolin", AUREOLIN),
    ("Azure", AZURE),
    ("Azure X11 Web Color", AZURE_X11_WEB_COLOR),
    ("Baby Blue", BABY_BLUE),
    ("Baby Blue Eyes", BABY_BLUE_EYES),
    ("Baby Pink", BABY_PINK),
    ("Baby Powder", BABY_POWDER),
    ("Baker Miller Pink", BAKER_MILLER_PINK),
    ("Banana Mania", BANANA_MANIA),
    ("Barbie Pink", BARBIE_PINK),
    ("Barn Red", BARN_RED),
    ("Battleship Grey", BATTLESHIP_GREY),
    ("Beau Blue", BEAU_BLUE),
    ("Beaver", BEAVER),
    ("Beige", BEIGE),
    ("B Dazzled Blue", B_DAZZLED_BLUE),
    ("Big Dip O Ruby", BIG_DIP_O_RUBY),
    ("Bisque", BISQUE),
    ("Bistre", BISTRE),
    ("Bistre Brown", BISTRE_BROWN),
    ("Bitter Lemon", BITTER_LEMON),
    ("Black", BLACK),
    ("Black Bean", BLACK_BEAN),
    ("Black Coral", BLACK_CORAL),
    ("Black Olive", BLACK_OLIVE),
    ("Black Shadows", BLACK_SHADOWS),
    ("Blanched Almond", BLANCHED_ALMOND),
    ("Blast Off Bronze", BLAST_OFF_BRONZE),
    ("Bleu De France", BLEU_DE_FRANCE),
    ("Blizzard Blue", BLIZZARD_BLUE),
    ("Blood Red", BLOOD_RED),
    ("Blue", BLUE),
    ("Blue Crayola", BLUE_CRAYOLA),
    ("Blue Munsell", BLUE_MUNSELL),
    ("Blue Ncs", BLUE_NCS),
    ("Blue Pantone", BLUE_PANTONE),
    ("Blue Pigment", BLUE_PIGMENT),
    ("Blue Bell", BLUE_BELL),
    ("Blue Gray Crayola", BLUE_GRAY_CRAYOLA),
    ("Blue Jeans", BLUE_JEANS),
    ("Blue Sapphire", BLUE_SAPPHIRE),
    ("Blue Violet", BLUE_VIOLET),
    ("Blue Yonder", BLUE_YONDER),
    ("Bluetiful", BLUETIFUL),
    ("Blush", BLUSH),
    ("Bole", BOLE),
    ("Bone", BONE),
    ("Brick Red", BRICK_RED),
    ("Bright Lilac", BRIGHT_LILAC),
    ("Bright Yellow Crayola", BRIGHT_YELLOW_CRAYOLA),
    ("Bronze", BRONZE),
    ("Brown", BROWN),
    ("Brown Sugar", BROWN_SUGAR),
    ("Bud Green", BUD_GREEN),
    ("Buff", BUFF),
    ("Burgundy", BURGUNDY),
    ("Burlywood", BURLYWOOD),
    ("Burnished Brown", BURNISHED_BROWN),
    ("Burnt Orange", BURNT_ORANGE),
    ("Burnt Sienna", BURNT_SIENNA),
    ("Burnt Umber", BURNT_UMBER),
    ("Byzantine", BYZANTINE),
    ("Byzantium", BYZANTIUM),
    ("Cadet Blue", CADET_BLUE),
    ("Cadet Grey", CADET_GREY),
    ("Cadmium Green", CADMIUM_GREEN),
    ("Cadmium Orange", CADMIUM_ORANGE),
    ("Cafe Au Lait", CAFE_AU_LAIT),
    ("Cafe Noir", CAFE_NOIR),
    ("Cambridge Blue", CAMBRIDGE_BLUE),
    ("Camel", CAMEL),
    ("Cameo Pink", CAMEO_PINK),
    ("Canary", CANARY),
    ("Canary Yellow", CANARY_YELLOW),
    ("Candy Pink", CANDY_PINK),
    ("Cardinal", CARDINAL),
    ("Caribbean Green", CARIBBEAN_GREEN),
    ("Carmine", CARMINE),
    ("Carmine M P", CARMINE_M_P),
    ("Carnation Pink", CARNATION_PINK),
    ("Carnelian", CARNELIAN),
    ("Carolina Blue", CAROLINA_BLUE),
    ("Carrot Orange", CARROT_ORANGE),
    ("Catawba", CATAWBA),
    ("Cedar Chest", CEDAR_CHEST),
    ("Celadon", CELADON),
    ("Celeste", CELESTE),
    ("Cerise", CERISE),
    ("Cerulean", CERULEAN),
    ("Cerulean Blue", CERULEAN_BLUE),
    ("Cerulean Frost", CERULEAN_FROST),
    ("Cerulean Crayola", CERULEAN_CRAYOLA),
    ("Cerulean Rgb", CERULEAN_RGB),
    ("Champagne", CHAMPAGNE),
    ("Champagne Pink", CHAMPAGNE_PINK),
    ("Charcoal", CHARCOAL),
    ("Charm Pink", CHARM_PINK),
    ("Chartreuse Web", CHARTREUSE_WEB),
    ("Cherry Blossom Pink", CHERRY_BLOSSOM_PINK),
    ("Chestnut", CHESTNUT),
    ("Chili Red", CHILI_RED),
    ("China Pink", CHINA_PINK),
    ("Chinese Red", CHINESE_RED),
    ("Chinese Violet", CHINESE_VIOLET),
    ("Chinese Yellow", CHINESE_YELLOW),
    ("Chocolate Traditional", CHOCOLATE_TRADITIONAL),
    ("Chocolate Web", CHOCOLATE_WEB),
    ("Cinereous", CINEREOUS),
    ("Cinnabar", CINNABAR),
    ("Cinnamon Satin", CINNAMON_SATIN),
    ("Citrine", CITRINE),
    ("Citron", CITRON),
    ("Claret", CLARET),
    ("Coffee", COFFEE),
    ("Columbia Blue", COLUMBIA_BLUE),
    ("Congo Pink", CONGO_PINK),
    ("Cool Grey", COOL_GREY),
    ("Copper", COPPER),
    ("Copper Crayola", COPPER_CRAYOLA),
    ("Copper Penny", COPPER_PENNY),
    ("Copper Red", COPPER_RED),
    ("Copper Rose", COPPER_ROSE),
    ("Coquelicot", COQUELICOT),
    ("Coral", CORAL),
    ("Coral Pink", CORAL_PINK),
    ("Cordovan", CORDOVAN),
    ("Corn", CORN),
    ("Cornflower Blue", CORNFLOWER_BLUE),
    ("Cornsilk", CORNSILK),
    ("Cosmic Cobalt", COSMIC_COBALT),
    ("Cosmic Latte", COSMIC_LATTE),
    ("Coyote Brown", COYOTE_BROWN),
    ("Cotton Candy", COTTON_CANDY),
    ("Cream", CREAM),
    ("Crimson", CRIMSON),
    ("Crimson Ua", CRIMSON_UA),
    ("Cultured Pearl", CULTURED_PEARL),
    ("Cyan", CYAN),
    ("Cyan Process", CYAN_PROCESS),
    ("Cyber Grape", CYBER_GRAPE),
    ("Cyber Yellow", CYBER_YELLOW),
    ("Cyclamen", CYCLAMEN),
    ("Dandelion", DANDELION),
    ("Dark Brown", DARK_BROWN),
    ("Dark Byzantium", DARK_BYZANTIUM),
    ("Dark Cyan", DARK_CYAN),
    ("Dark Electric Blue", DARK_ELECTRIC_BLUE),
    ("Dark Goldenrod", DARK_GOLDENROD),
    ("Dark Green X11", DARK_GREEN_X11),
    ("Dark Jungle Green", DARK_JUNGLE_GREEN),
    ("Dark Khaki", DARK_KHAKI),
    ("Dark Lava", DARK_LAVA),
    ("Dark Liver Horses", DARK_LIVER_HORSES),
    ("Dark Magenta", DARK_MAGENTA),
    ("Dark Olive Green", DARK_OLIVE_GREEN),
    ("Dark Orange", DARK_ORANGE),
    ("Dark Orchid", DARK_ORCHID),
    ("Dark Purple", DARK_PURPLE),
    ("Dark Red", DARK_RED),
    ("Dark Salmon", DARK_SALMON),
    ("Dark Sea Green", DARK_SEA_GREEN),
    ("Dark Sienna", DARK_SIENNA),
    ("Dark Sky Blue", DARK_SKY_BLUE),
    ("Dark Slate Blue", DARK_SLATE_BLUE),
    ("Dark Slate Gray", DARK_SLATE_GRAY),
    ("Dark Spring Green", DARK_SPRING_GREEN),
    ("Dark Turquoise", DARK_TURQUOISE),
    ("Dark Violet", DARK_VIOLET),
    ("Davy S Grey", DAVY_S_GREY),
    ("Deep Cerise", DEEP_CERISE),
    ("Deep Champagne", DEEP_CHAMPAGNE),
    ("Deep Chestnut", DEEP_CHESTNUT),
    ("Deep Jungle Green", DEEP_JUNGLE_GREEN),
    ("Deep Pink", DEEP_PINK),
    ("Deep Saffron", DEEP_SAFFRON),
    ("Deep Sky Blue", DEEP_SKY_BLUE),
    ("Deep Space Sparkle", DEEP_SPACE_SPARKLE),
    ("Deep Taupe", DEEP_TAUPE),
    ("Denim", DENIM),
    ("Denim Blue", DENIM_BLUE),
    ("Desert", DESERT),
    ("Desert Sand", DESERT_SAND),
    ("Dim Gray", DIM_GRAY),
    ("Dodger Blue", DODGER_BLUE),
    ("Drab Dark Brown", DRAB_DARK_BROWN),
    ("Duke Blue", DUKE_BLUE),
    ("Dutch White", DUTCH_WHITE),
    ("Ebony", EBONY),
    ("Ecru", ECRU),
    ("Eerie Black", EERIE_BLACK),
    ("Eggplant", EGGPLANT),
    ("Eggshell", EGGSHELL),
    ("Electric Lime", ELECTRIC_LIME),
    ("Electric Purple", ELECTRIC_PURPLE),
    ("Electric Violet", ELECTRIC_VIOLET),
    ("Emerald", EMERALD),
    ("Eminence", EMINENCE),
    ("English Lavender", ENGLISH_LAVENDER),
    ("English Red", ENGLISH_RED),
    ("English Vermillion", ENGLISH_VERMILLION),
    ("English Violet", ENGLISH_VIOLET),
    ("Erin", ERIN),
    ("Eton Blue", ETON_BLUE),
    ("Fallow", FALLOW),
    ("Falu Red", FALU_RED),
    ("Fandango", FANDANGO),
    ("Fandango Pink", FANDANGO_PINK),
    ("Fawn", FAWN),
    ("Fern Green", FERN_GREEN),
    ("Field Drab", FIELD_DRAB),
    ("Fiery Rose", FIERY_ROSE),
    ("Finn", FINN),
    ("Firebrick", FIREBRICK),
    ("Fire Engine Red", FIRE_ENGINE_RED),
    ("Flame", FLAME),
    ("Flax", FLAX),
    ("Flirt", FLIRT),
    ("Floral White", FLORAL_WHITE),
    ("Forest Green Web", FOREST_GREEN_WEB),
    ("French Beige", FRENCH_BEIGE),
    ("French Bistre", FRENCH_BISTRE),
    ("French Blue", FRENCH_BLUE),
    ("French Fuchsia", FRENCH_FUCHSIA),
    ("French Lilac", FRENCH_LILAC),
    ("French Lime", FRENCH_LIME),
    ("French Mauve", FRENCH_MAUVE),
    ("French Pink", FRENCH_PINK),
    ("French Raspberry", FRENCH_RASPBERRY),
    ("French Sky Blue", FRENCH_SKY_BLUE),
    ("French Violet", FRENCH_VIOLET),
    ("Frostbite", FROSTBITE),
    ("Fuchsia", FUCHSIA),
    ("Fuchsia Crayola", FUCHSIA_CRAYOLA),
    ("Fulvous", FULVOUS),
    ("Fuzzy Wuzzy", FUZZY_WUZZY),
    ("Gainsboro", GAINSBORO),
    ("Gamboge", GAMBOGE),
    ("Generic Viridian", GENERIC_VIRIDIAN),
    ("Ghost White", GHOST_WHITE),
    ("Glaucous", GLAUCOUS),
    ("Glossy Grape", GLOSSY_GRAPE),
    ("Go Green", GO_GREEN),
    ("Gold Metallic", GOLD_METALLIC),
    ("Gold Web Golden", GOLD_WEB_GOLDEN),
    ("Gold Crayola", GOLD_CRAYOLA),
    ("Gold Fusion", GOLD_FUSION),
    ("Golden Brown", GOLDEN_BROWN),
    ("Golden Poppy", GOLDEN_POPPY),
    ("Golden Yellow", GOLDEN_YELLOW),
    ("Goldenrod", GOLDENROD),
    ("Gotham Green", GOTHAM_GREEN),
    ("Granite Gray", GRANITE_GRAY),
    ("Granny Smith Apple", GRANNY_SMITH_APPLE),
    ("Gray Web", GRAY_WEB),
    ("Gray X11 Gray", GRAY_X11_GRAY),
    ("Green", GREEN),
    ("Green Crayola", GREEN_CRAYOLA),
    ("Green Web", GREEN_WEB),
    ("Green Munsell", GREEN_MUNSELL),
    ("Green Ncs", GREEN_NCS),
    ("Green Pantone", GREEN_PANTONE),
    ("Green Pigment", GREEN_PIGMENT),
    ("Green Blue", GREEN_BLUE),
    ("Green Lizard", GREEN_LIZARD),
    ("Green Sheen", GREEN_SHEEN),
    ("Gunmetal", GUNMETAL),
    ("Hansa Yellow", HANSA_YELLOW),
    ("Harlequin", HARLEQUIN),
    ("Harvest Gold", HARVEST_GOLD),
    ("Heat Wave", HEAT_WAVE),
    ("Heliotrope", HELIOTROPE),
    ("Heliotrope Gray", HELIOTROPE_GRAY),
    ("Hollywood Cerise", HOLLYWOOD_CERISE),
    ("Honolulu Blue", HONOLULU_BLUE),
    ("Hooker S Green", HOOKER_S_GREEN),
    ("Hot Magenta", HOT_MAGENTA),
    ("Hot Pink", HOT_PINK),
    ("Hunter Green", HUNTER_GREEN),
    ("Iceberg", ICEBERG),
    ("Illuminating Emerald", ILLUMINATING_EMERALD),
    ("Imperial Red", IMPERIAL_RED),
    ("Inchworm", INCHWORM),
    ("Independence", INDEPENDENCE),
    ("India Green", INDIA_GREEN),
    ("Indian Red", INDIAN_RED),
    ("Indian Yellow", INDIAN_YELLOW),
    ("Indigo", INDIGO),
    ("Indigo Dye", INDIGO_DYE),
    ("International Klein Blue", INTERNATIONAL_KLEIN_BLUE),
    ("International Orange Engineering", INTERNATIONAL_ORANGE_ENGINEERING),
    ("International Orange Golden Gate Bridge", INTERNATIONAL_ORANGE_GOLDEN_GATE_BRIDGE),
    ("Irresistible", IRRESISTIBLE),
    ("Isabelline", ISABELLINE),
    ("Italian Sky Blue", ITALIAN_SKY_BLUE),
    ("Ivory", IVORY),
    ("Japanese Carmine", JAPANESE_CARMINE),
    ("Japanese Violet", JAPANESE_VIOLET),
    ("Jasmine", JASMINE),
    ("Jazzberry Jam", JAZZBERRY_JAM),
    ("Jet", JET),
    ("Jonquil", JONQUIL),
    ("June Bud", JUNE_BUD),
    ("Jungle Green", JUNGLE_GREEN),
    ("Kelly Green", KELLY_GREEN),
    ("Keppel", KEPPEL),
    ("Key Lime", KEY_LIME),
    ("Khaki Web", KHAKI_WEB),
    ("Khaki X11 Light Khaki", KHAKI_X11_LIGHT_KHAKI),
    ("Kobe", KOBE),
    ("Kobi", KOBI),
    ("Kobicha", KOBICHA),
    ("Ksu Purple", KSU_PURPLE),
    ("Languid Lavender", LANGUID_LAVENDER),
    ("Lapis Lazuli", LAPIS_LAZULI),
    ("Laser Lemon", LASER_LEMON),
    ("Laurel Green", LAUREL_GREEN),
    ("Lava", LAVA),
    ("Lavender Floral", LAVENDER_FLORAL),
    ("Lavender Web", LAVENDER_WEB),
    ("Lavender Blue", LAVENDER_BLUE),
    ("Lavender Blush", LAVENDER_BLUSH),
    ("Lavender Gray", LAVENDER_GRAY),
    ("Lawn Green", LAWN_GREEN),
    ("Lemon", LEMON),
    ("Lemon Chiffon", LEMON_CHIFFON),
    ("Lemon Curry", LEMON_CURRY),
    ("Lemon Glacier", LEMON_GLACIER),
    ("Lemon Meringue", LEMON_MERINGUE),
    ("Lemon Yellow", LEMON_YELLOW),
    ("Lemon Yellow Crayola", LEMON_YELLOW_CRAYOLA),
    ("Liberty", LIBERTY),
    ("Light Blue", LIGHT_BLUE),
    ("Light Coral", LIGHT_CORAL),
    ("Light Cornflower Blue", LIGHT_CORNFLOWER_BLUE),
    ("Light Cyan", LIGHT_CYAN),
    ("Light French Beige", LIGHT_FRENCH_BEIGE),
    ("Light Goldenrod Yellow", LIGHT_GOLDENROD_YELLOW),
    ("Light Gray", LIGHT_GRAY),
    ("Light Green", LIGHT_GREEN),
    ("Light Orange", LIGHT_ORANGE),
    ("Light Periwinkle", LIGHT_PERIWINKLE),
    ("Light Pink", LIGHT_PINK),
    ("Light Salmon", LIGHT_SALMON),
    ("Light Sea Green", LIGHT_SEA_GREEN),
    ("Light Sky Blue", LIGHT_SKY_BLUE),
    ("Light Slate Gray", LIGHT_SLATE_GRAY),
    ("Light Steel Blue", LIGHT_STEEL_BLUE),
    ("Light Yellow", LIGHT_YELLOW),
    ("Lilac", LILAC),
    ("Lilac Luster", LILAC_LUSTER),
    ("Lime Color Wheel", LIME_COLOR_WHEEL),
    ("Lime Web X11 Green", LIME_WEB_X11_GREEN),
    ("Lime Green", LIME_GREEN),
    ("Lincoln Green", LINCOLN_GREEN),
    ("Linen", LINEN),
    ("Lion", LION),
    ("Liseran Purple", LISERAN_PURPLE),
    ("Little Boy Blue", LITTLE_BOY_BLUE),
    ("Liver", LIVER),
    ("Liver Dogs", LIVER_DOGS),
    ("Liver Organ", LIVER_ORGAN),
    ("Liver Chestnut", LIVER_CHESTNUT),
    ("Livid", LIVID),
    ("Macaroni And Cheese", MACARONI_AND_CHEESE),
    ("Madder Lake", MADDER_LAKE),
    ("Magenta", MAGENTA),
    ("Magenta Crayola", MAGENTA_CRAYOLA),
    ("Magenta Dye", MAGENTA_DYE),
    ("Magenta Pantone", MAGENTA_PANTONE),
    ("Magenta Process", MAGENTA_PROCESS),
    ("Magenta Haze", MAGENTA_HAZE),
    ("Magic Mint", MAGIC_MINT),
    ("Magnolia", MAGNOLIA),
    ("Mahogany", MAHOGANY),
    ("Maize", MAIZE),
    ("Maize Crayola", MAIZE_CRAYOLA),
    ("Majorelle Blue", MAJORELLE_BLUE),
    ("Malachite", MALACHITE),
    ("Manatee", MANATEE),
    ("Mandarin", MANDARIN),
    ("Mango", MANGO),
    ("Mango Tango", MANGO_TANGO),
    ("Mantis", MANTIS),
    ("Mardi Gras", MARDI_GRAS),
    ("Marigold", MARIGOLD),
    ("Maroon Crayola", MAROON_CRAYOLA),
    ("Maroon Web", MAROON_WEB),
    ("Maroon X11", MAROON_X11),
    ("Mauve", MAUVE),
    ("Mauve Taupe", MAUVE_TAUPE),
    ("Mauvelous", MAUVELOUS),
    ("Maximum Blue", MAXIMUM_BLUE),
    ("Maximum Blue Green", MAXIMUM_BLUE_GREEN),
    ("Maximum Blue Purple", MAXIMUM_BLUE_PURPLE),
    ("Maximum Green", MAXIMUM_GREEN),
    ("Maximum Green Yellow", MAXIMUM_GREEN_YELLOW),
    ("Maximum Purple", MAXIMUM_PURPLE),
    ("Maximum Red", MAXIMUM_RED),
    ("Maximum Red Purple", MAXIMUM_RED_PURPLE),
    ("Maximum Yellow", MAXIMUM_YELLOW),
    ("Maximum Yellow Red", MAXIMUM_YELLOW_RED),
    ("May Green", MAY_GREEN),
    ("Maya Blue", MAYA_BLUE),
    ("Medium Aquamarine", MEDIUM_AQUAMARINE),
    ("Medium Blue", MEDIUM_BLUE),
    ("Medium Candy Apple Red", MEDIUM_CANDY_APPLE_RED),
    ("Medium Carmine", MEDIUM_CARMINE),
    ("Medium Champagne", MEDIUM_CHAMPAGNE),
    ("Medium Orchid", MEDIUM_ORCHID),
    ("Medium Purple", MEDIUM_PURPLE),
    ("Medium Sea Green", MEDIUM_SEA_GREEN),
    ("Medium Slate Blue", MEDIUM_SLATE_BLUE),
    ("Medium Spring Green", MEDIUM_SPRING_GREEN),
    ("Medium Turquoise", MEDIUM_TURQUOISE),
    ("Medium Violet Red", MEDIUM_VIOLET_RED),
    ("Mellow Apricot", MELLOW_APRICOT),
    ("Mellow Yellow", MELLOW_YELLOW),
    ("Melon", MELON),
    ("Metallic Gold", METALLIC_GOLD),
    ("Metallic Seaweed", METALLIC_SEAWEED),
    ("Metallic Sunburst", METALLIC_SUNBURST),
    ("Mexican Pink", MEXICAN_PINK),
    ("Middle Blue", MIDDLE_BLUE),
    ("Middle Blue Green", MIDDLE_BLUE_GREEN),
    ("Middle Blue Purple", MIDDLE_BLUE_PURPLE),
    ("Middle Grey", MIDDLE_GREY),
    ("Middle Green", MIDDLE_GREEN),
    ("Middle Green Yellow", MIDDLE_GREEN_YELLOW),
    ("Middle Purple", MIDDLE_PURPLE),
    ("Middle Red", MIDDLE_RED),
    ("Middle Red Purple", MIDDLE_RED_PURPLE),
    ("Middle Yellow", MIDDLE_YELLOW),
    ("Middle Yellow Red", MIDDLE_YELLOW_RED),
    ("Midnight", MIDNIGHT),
    ("Midnight Blue", MIDNIGHT_BLUE),
    ("Midnight Green Eagle Green", MIDNIGHT_GREEN_EAGLE_GREEN),
    ("Mikado Yellow", MIKADO_YELLOW),
    ("Mimi Pink", MIMI_PINK),
    ("Mindaro", MINDARO),
    ("Ming", MING),
    ("Minion Yellow", MINION_YELLOW),
    ("Mint", MINT),
    ("Mint Cream", MINT_CREAM),
    ("Mint Green", MINT_GREEN),
    ("Misty Moss", MISTY_MOSS),
    ("Misty Rose", MISTY_ROSE),
    ("Mode Beige", MODE_BEIGE),
    ("Mona Lisa", MONA_LISA),
    ("Morning Blue", MORNING_BLUE),
    ("Moss Green", MOSS_GREEN),
    ("Mountain Meadow", MOUNTAIN_MEADOW),
    ("Mountbatten Pink", MOUNTBATTEN_PINK),
    ("Msu Green", MSU_GREEN),
    ("Mulberry", MULBERRY),
    ("Mulberry Crayola", MULBERRY_CRAYOLA),
    ("Mustard", MUSTARD),
    ("Myrtle Green", MYRTLE_GREEN),
    ("Mystic", MYSTIC),
    ("Mystic Maroon", MYSTIC_MAROON),
    ("Nadeshiko Pink", NADESHIKO_PINK),
    ("Naples Yellow", NAPLES_YELLOW),
    ("Navajo White", NAVAJO_WHITE),
    ("Navy Blue", NAVY_BLUE),
    ("Navy Blue Crayola", NAVY_BLUE_CRAYOLA),
    ("Neon Blue", NEON_BLUE),
    ("Neon Green", NEON_GREEN),
    ("Neon Fuchsia", NEON_FUCHSIA),
    ("New Car", NEW_CAR),
    ("New York Pink", NEW_YORK_PINK),
    ("Nickel", NICKEL),
    ("Non Photo Blue", NON_PHOTO_BLUE),
    ("Nyanza", NYANZA),
    ("Ochre", OCHRE),
    ("Old Burgundy", OLD_BURGUNDY),
    ("Old Gold", OLD_GOLD),
    ("Old Lace", OLD_LACE),
    ("Old Lavender", OLD_LAVENDER),
    ("Old Mauve", OLD_MAUVE),
    ("Old Rose", OLD_ROSE),
    ("Old Silver", OLD_SILVER),
    ("Olive", OLIVE),
    ("Olive Drab3", OLIVE_DRAB3),
    ("Olive Drab7", OLIVE_DRAB7),
    ("Olive Green", OLIVE_GREEN),
    ("Olivine", OLIVINE),
    ("Onyx", ONYX),
    ("Opal", OPAL),
    ("Opera Mauve", OPERA_MAUVE),
    ("Orange", ORANGE),
    ("Orange Crayola", ORANGE_CRAYOLA),
    ("Orange Pantone", ORANGE_PANTONE),
    ("Orange Web", ORANGE_WEB),
    ("Orange Peel", ORANGE_PEEL),
    ("Orange Red", ORANGE_RED),
    ("Orange Red Crayola", ORANGE_RED_CRAYOLA),
    ("Orange Soda", ORANGE_SODA),
    ("Orange Yellow", ORANGE_YELLOW),
    ("Orange Yellow Crayola", ORANGE_YELLOW_CRAYOLA),
    ("Orchid", ORCHID),
    ("Orchid Pink", ORCHID_PINK),
    ("Orchid Crayola", ORCHID_CRAYOLA),
    ("Outer Space Crayola", OUTER_SPACE_CRAYOLA),
    ("Outrageous Orange", OUTRAGEOUS_ORANGE),
    ("Oxblood", OXBLOOD),
    ("Oxford Blue", OXFORD_BLUE),
    ("Ou Crimson Red", OU_CRIMSON_RED),
    ("Pacific Blue", PACIFIC_BLUE),
    ("Pakistan Green", PAKISTAN_GREEN),
    ("Palatinate Purple", PALATINATE_PURPLE),
    ("Pale Aqua", PALE_AQUA),
    ("Pale Cerulean", PALE_CERULEAN),
    ("Pale Dogwood", PALE_DOGWOOD),
    ("Pale Pink", PALE_PINK),
    ("Pale Purple Pantone", PALE_PURPLE_PANTONE),
    ("Pale Spring Bud", PALE_SPRING_BUD),
    ("Pansy Purple", PANSY_PURPLE),
    ("Paolo Veronese Green", PAOLO_VERONESE_GREEN),
    ("Papaya Whip", PAPAYA_WHIP),
    ("Paradise Pink", PARADISE_PINK),
    ("Parchment", PARCHMENT),
    ("Paris Green", PARIS_GREEN),
    ("Pastel Pink", PASTEL_PINK),
    ("Patriarch", PATRIARCH),
    ("Paua", PAUA),
    ("Payne S Grey", PAYNE_S_GREY),
    ("Peach", PEACH),
    ("Peach Crayola", PEACH_CRAYOLA),
    ("Peach Puff", PEACH_PUFF),
    ("Pear", PEAR),
    ("Pearly Purple", PEARLY_PURPLE),
    ("Periwinkle", PERIWINKLE),
    ("Periwinkle Crayola", PERIWINKLE_CRAYOLA),
    ("Permanent Geranium Lake", PERMANENT_GERANIUM_LAKE),
    ("Persian Blue", PERSIAN_BLUE),
    ("Persian Green", PERSIAN_GREEN),
    ("Persian Indigo", PERSIAN_INDIGO),
    ("Persian Orange", PERSIAN_ORANGE),
    ("Persian Pink", PERSIAN_PINK),
    ("Persian Plum", PERSIAN_PLUM),
    ("Persian Red", PERSIAN_RED),
    ("Persian Rose", PERSIAN_ROSE),
    ("Persimmon", PERSIMMON),
    ("Pewter Blue", PEWTER_BLUE),
    ("Phlox", PHLOX),
    ("Phthalo Blue", PHTHALO_BLUE),
    ("Phthalo Green", PHTHALO_GREEN),
    ("Picotee Blue", PICOTEE_BLUE),
    ("Pictorial Carmine", PICTORIAL_CARMINE),
    ("Piggy Pink", PIGGY_PINK),
    ("Pine Green", PINE_GREEN),
    ("Pine Tree", PINE_TREE),
    ("Pink", PINK),
    ("Pink Pantone", PINK_PANTONE),
    ("Pink Lace", PINK_LACE),
    ("Pink Lavender", PINK_LAVENDER),
    ("Pink Sherbet", PINK_SHERBET),
    ("Pistachio", PISTACHIO),
    ("Platinum", PLATINUM),
    ("Plum", PLUM),
    ("Plum Web", PLUM_WEB),
    ("Plump Purple", PLUMP_PURPLE),
    ("Polished Pine", POLISHED_PINE),
    ("Pomp And Power", POMP_AND_POWER),
    ("Popstar", POPSTAR),
    ("Portland Orange", PORTLAND_ORANGE),
    ("Powder Blue", POWDER_BLUE),
    ("Prairie Gold", PRAIRIE_GOLD),
    ("Princeton Orange", PRINCETON_ORANGE),
    ("Process Yellow", PROCESS_YELLOW),
    ("Prune", PRUNE),
    ("Prussian Blue", PRUSSIAN_BLUE),
    ("Psychedelic Purple", PSYCHEDELIC_PURPLE),
    ("Puce", PUCE),
    ("Pullman Brown Ups Brown", PULLMAN_BROWN_UPS_BROWN),
    ("Pumpkin", PUMPKIN),
    ("Purple", PURPLE),
    ("Purple Web", PURPLE_WEB),
    ("Purple Munsell", PURPLE_MUNSELL),
    ("Purple X11", PURPLE_X11),
    ("Purple Mountain Majesty", PURPLE_MOUNTAIN_MAJESTY),
    ("Purple Navy", PURPLE_NAVY),
    ("Purple Pizzazz", PURPLE_PIZZAZZ),
    ("Purple Plum", PURPLE_PLUM),
    ("Purpureus", PURPUREUS),
    ("Queen Blue", QUEEN_BLUE),
    ("Queen Pink", QUEEN_PINK),
    ("Quick Silver", QUICK_SILVER),
    ("Quinacridone Magenta", QUINACRIDONE_MAGENTA),
    ("Radical Red", RADICAL_RED),
    ("Raisin Black", RAISIN_BLACK),
    ("Rajah", RAJAH),
    ("Raspberry", RASPBERRY),
    ("Raspberry Glace", RASPBERRY_GLACE),
    ("Raspberry Rose", RASPBERRY_ROSE),
    ("Raw Sienna", RAW_SIENNA),
    ("Raw Umber", RAW_UMBER),
    ("Razzle Dazzle Rose", RAZZLE_DAZZLE_ROSE),
    ("Razzmatazz", RAZZMATAZZ),
    ("Razzmic Berry", RAZZMIC_BERRY),
    ("Rebecca Purple", REBECCA_PURPLE),
    ("Red", RED),
    ("Red Crayola", RED_CRAYOLA),
    ("Red Munsell", RED_MUNSELL),
    ("Red Ncs", RED_NCS),
    ("Red Pantone", RED_PANTONE),
    ("Red Pigment", RED_PIGMENT),
    ("Red Ryb", RED_RYB),
    ("Red Orange", RED_ORANGE),
    ("Red Orange Crayola", RED_ORANGE_CRAYOLA),
    ("Red Orange Color Wheel", RED_ORANGE_COLOR_WHEEL),
    ("Red Purple", RED_PURPLE),
    ("Red Salsa", RED_SALSA),
    ("Red Violet", RED_VIOLET),
    ("Red Violet Crayola", RED_VIOLET_CRAYOLA),
    ("Red Violet Color Wheel", RED_VIOLET_COLOR_WHEEL),
    ("Redwood", REDWOOD),
    ("Resolution Blue", RESOLUTION_BLUE),
    ("Rhythm", RHYTHM),
    ("Rich Black", RICH_BLACK),
    ("Rich Black Fogra29", RICH_BLACK_FOGRA29),
    ("Rich Black Fogra39", RICH_BLACK_FOGRA39),
    ("Rifle Green", RIFLE_GREEN),
    ("Robin Egg Blue", ROBIN_EGG_BLUE),
    ("Rocket Metallic", ROCKET_METALLIC),
    ("Rojo Spanish Red", ROJO_SPANISH_RED),
    ("Roman Silver", ROMAN_SILVER),
    ("Rose", ROSE),
    ("Rose Bonbon", ROSE_BONBON),
    ("Rose Dust", ROSE_DUST),
    ("Rose Ebony", ROSE_EBONY),
    ("Rose Madder", ROSE_MADDER),
    ("Rose Pink", ROSE_PINK),
    ("Rose Pompadour", ROSE_POMPADOUR),
    ("Rose Red", ROSE_RED),
    ("Rose Taupe", ROSE_TAUPE),
    ("Rose Vale", ROSE_VALE),
    ("Rosewood", ROSEWOOD),
    ("Rosso Corsa", ROSSO_CORSA),
    ("Rosy Brown", ROSY_BROWN),
    ("Royal Blue Dark", ROYAL_BLUE_DARK),
    ("Royal Blue Light", ROYAL_BLUE_LIGHT),
    ("Royal Purple", ROYAL_PURPLE),
    ("Royal Yellow", ROYAL_YELLOW),
    ("Ruber", RUBER),
    ("Rubine Red", RUBINE_RED),
    ("Ruby", RUBY),
    ("Ruby Red", RUBY_RED),
    ("Rufous", RUFOUS),
    ("Russet", RUSSET),
    ("Russian Green", RUSSIAN_GREEN),
    ("Russian Violet", RUSSIAN_VIOLET),
    ("Rust", RUST),
    ("Rusty Red", RUSTY_RED),
    ("Sacramento State Green", SACRAMENTO_STATE_GREEN),
    ("Saddle Brown", SADDLE_BROWN),
    ("Safety Orange", SAFETY_ORANGE),
    ("Safety Orange Blaze Orange", SAFETY_ORANGE_BLAZE_ORANGE),
    ("Safety Yellow", SAFETY_YELLOW),
    ("Saffron", SAFFRON),
    ("Sage", SAGE),
    ("St Patrick S Blue", ST_PATRICK_S_BLUE),
    ("Salmon", SALMON),
    ("Salmon Pink", SALMON_PINK),
    ("Sand", SAND),
    ("Sand Dune", SAND_DUNE),
    ("Sandy Brown", SANDY_BROWN),
    ("Sap Green", SAP_GREEN),
    ("Sapphire", SAPPHIRE),
    ("Sapphire Blue", SAPPHIRE_BLUE),
    ("Sapphire Crayola", SAPPHIRE_CRAYOLA),
    ("Satin Sheen Gold", SATIN_SHEEN_GOLD),
    ("Scarlet", SCARLET),
    ("Schauss Pink", SCHAUSS_PINK),
    ("School Bus Yellow", SCHOOL_BUS_YELLOW),
    ("Screamin Green", SCREAMIN_GREEN),
    ("Sea Green", SEA_GREEN),
    ("Sea Green Crayola", SEA_GREEN_CRAYOLA),
    ("Seance", SEANCE),
    ("Seal Brown", SEAL_BROWN),
    ("Seashell", SEASHELL),
    ("Secret", SECRET),
    ("Selective Yellow", SELECTIVE_YELLOW),
    ("Sepia", SEPIA),
    ("Shadow", SHADOW),
    ("Shadow Blue", SHADOW_BLUE),
    ("Shamrock Green", SHAMROCK_GREEN),
    ("Sheen Green", SHEEN_GREEN),
    ("Shimmering Blush", SHIMMERING_BLUSH),
    ("Shiny Shamrock", SHINY_SHAMROCK),
    ("Shocking Pink", SHOCKING_PINK),
    ("Shocking Pink Crayola", SHOCKING_PINK_CRAYOLA),
    ("Sienna", SIENNA),
    ("Silver", SILVER),
    ("Silver Crayola", SILVER_CRAYOLA),
    ("Silver Metallic", SILVER_METALLIC),
    ("Silver Chalice", SILVER_CHALICE),
    ("Silver Pink", SILVER_PINK),
    ("Silver Sand", SILVER_SAND),
    ("Sinopia", SINOPIA),
    ("Sizzling Red", SIZZLING_RED),
    ("Sizzling Sunrise", SIZZLING_SUNRISE),
    ("Skobeloff", SKOBELOFF),
    ("Sky Blue", SKY_BLUE),
    ("Sky Blue Crayola", SKY_BLUE_CRAYOLA),
    ("Sky Magenta", SKY_MAGENTA),
    ("Slate Blue", SLATE_BLUE),
    ("Slate Gray", SLATE_GRAY),
    ("Slimy Green", SLIMY_GREEN),
    ("Smitten", SMITTEN),
    ("Smoky Black", SMOKY_BLACK),
    ("Snow", SNOW),
    ("Solid Pink", SOLID_PINK),
    ("Sonic Silver", SONIC_SILVER),
    ("Space Cadet", SPACE_CADET),
    ("Spanish Bistre", SPANISH_BISTRE),
    ("Spanish Blue", SPANISH_BLUE),
    ("Spanish Carmine", SPANISH_CARMINE),
    ("Spanish Gray", SPANISH_GRAY),
    ("Spanish Green", SPANISH_GREEN),
    ("Spanish Orange", SPANISH_ORANGE),
    ("Spanish Pink", SPANISH_PINK),
    ("Spanish Red", SPANISH_RED),
    ("Spanish Sky Blue", SPANISH_SKY_BLUE),
    ("Spanish Violet", SPANISH_VIOLET),
    ("Spanish Viridian", SPANISH_VIRIDIAN),
    ("Spring Bud", SPRING_BUD),
    ("Spring Frost", SPRING_FROST),
    ("Spring Green", SPRING_GREEN),
    ("Spring Green Crayola", SPRING_GREEN_CRAYOLA),
    ("Star Command Blue", STAR_COMMAND_BLUE),
    ("Steel Blue", STEEL_BLUE),
    ("Steel Pink", STEEL_PINK),
    ("Stil De Grain Yellow", STIL_DE_GRAIN_YELLOW),
    ("Straw", STRAW),
    ("Strawberry", STRAWBERRY),
    ("Strawberry Blonde", STRAWBERRY_BLONDE),
    ("Strong Lime Green", STRONG_LIME_GREEN),
    ("Sugar Plum", SUGAR_PLUM),
    ("Sunglow", SUNGLOW),
    ("Sunray", SUNRAY),
    ("Sunset", SUNSET),
    ("Super Pink", SUPER_PINK),
    ("Sweet Brown", SWEET_BROWN),
    ("Syracuse Orange", SYRACUSE_ORANGE),
    ("Tan", TAN),
    ("Tan Crayola", TAN_CRAYOLA),
    ("Tangerine", TANGERINE),
    ("Tango Pink", TANGO_PINK),
    ("Tart Orange", TART_ORANGE),
    ("Taupe", TAUPE),
    ("Taupe Gray", TAUPE_GRAY),
    ("Tea Green", TEA_GREEN),
    ("Tea Rose", TEA_ROSE),
    ("Teal", TEAL),
    ("Teal Blue", TEAL_BLUE),
    ("Technobotanica", TECHNOBOTANICA),
    ("Telemagenta", TELEMAGENTA),
    ("Tawny", TAWNY),
    ("Terra Cotta", TERRA_COTTA),
    ("Thistle", THISTLE),
    ("Thulian Pink", THULIAN_PINK),
    ("Tickle Me Pink", TICKLE_ME_PINK),
    ("Tiffany Blue", TIFFANY_BLUE),
    ("Timberwolf", TIMBERWOLF),
    ("Titanium Yellow", TITANIUM_YELLOW),
    ("Tomato", TOMATO),
    ("Tourmaline", TOURMALINE),
    ("Tropical Rainforest", TROPICAL_RAINFOREST),
    ("True Blue", TRUE_BLUE),
    ("Trypan Blue", TRYPAN_BLUE),
    ("Tufts Blue", TUFTS_BLUE),
    ("Tumbleweed", TUMBLEWEED),
    ("Turquoise", TURQUOISE),
    ("Turquoise Blue", TURQUOISE_BLUE),
    ("Turquoise Green", TURQUOISE_GREEN),
    ("Turtle Green", TURTLE_GREEN),
    ("Tuscan", TUSCAN),
    ("Tuscan Brown", TUSCAN_BROWN),
    ("Tuscan Red", TUSCAN_RED),
    ("Tuscan Tan", TUSCAN_TAN),
    ("Tuscany", TUSCANY),
    ("Twilight Lavender", TWILIGHT_LAVENDER),
    ("Tyrian Purple", TYRIAN_PURPLE),
    ("Ua Blue", UA_BLUE),
    ("Ua Red", UA_RED),
    ("Ultramarine", ULTRAMARINE),
    ("Ultramarine Blue", ULTRAMARINE_BLUE),
    ("Ultra Pink", ULTRA_PINK),
    ("Ultra Red", ULTRA_RED),
    ("Umber", UMBER),
    ("Unbleached Silk", UNBLEACHED_SILK),
    ("United Nations Blue", UNITED_NATIONS_BLUE),
    ("University Of Pennsylvania Red", UNIVERSITY_OF_PENNSYLVANIA_RED),
    ("Unmellow Yellow", UNMELLOW_YELLOW),
    ("Up Forest Green", UP_FOREST_GREEN),
    ("Up Maroon", UP_MAROON),
    ("Upsdell Red", UPSDELL_RED),
    ("Uranian Blue", URANIAN_BLUE),
    ("Usafa Blue", USAFA_BLUE),
    ("Van Dyke Brown", VAN_DYKE_BROWN),
    ("Vanilla", VANILLA),
    ("Vanilla Ice", VANILLA_ICE),
    ("Vegas Gold", VEGAS_GOLD),
    ("Venetian Red", VENETIAN_RED),
    ("Verdigris", VERDIGRIS),
    ("Vermilion", VERMILION),
    ("Veronica", VERONICA),
    ("Violet", VIOLET),
    ("Violet Color Wheel", VIOLET_COLOR_WHEEL),
    ("Violet Crayola", VIOLET_CRAYOLA),
    ("Violet Ryb", VIOLET_RYB),
    ("Violet Web", VIOLET_WEB),
    ("Violet Blue", VIOLET_BLUE),
    ("Violet Blue Crayola", VIOLET_BLUE_CRAYOLA),
    ("Violet Red", VIOLET_RED),
    ("Violet Red Perbang", VIOLET_RED_PERBANG),
    ("Viridian", VIRIDIAN),
    ("Viridian Green", VIRIDIAN_GREEN),
    ("Vivid Burgundy", VIVID_BURGUNDY),
    ("Vivid Sky Blue", VIVID_SKY_BLUE),
    ("Vivid Tangerine", VIVID_TANGERINE),
    ("Vivid Violet", VIVID_VIOLET),
    ("Volt", VOLT),
    ("Warm Black", WARM_BLACK),
    ("Weezy Blue", WEEZY_BLUE),
    ("Wheat", WHEAT),
    ("White", WHITE),
    ("Wild Blue Yonder", WILD_BLUE_YONDER),
    ("Wild Orchid", WILD_ORCHID),
    ("Wild Strawberry", WILD_STRAWBERRY),
    ("Wild Watermelon", WILD_WATERMELON),
    ("Windsor Tan", WINDSOR_TAN),
    ("Wine", WINE),
    ("Wine Dregs", WINE_DREGS),
    ("Winter Sky", WINTER_SKY),
    ("Wintergreen Dream", WINTERGREEN_DREAM),
    ("Wisteria", WISTERIA),
    ("Wood Brown", WOOD_BROWN),
    ("Xanadu", XANADU),
    ("Xanthic", XANTHIC),
    ("Xanthous", XANTHOUS),
    ("Yale Blue", YALE_BLUE),
    ("Yellow", YELLOW),
    ("Yellow Crayola", YELLOW_CRAYOLA),
    ("Yellow Munsell", YELLOW_MUNSELL),
    ("Yellow Ncs", YELLOW_NCS),
    ("Yellow Pantone", YELLOW_PANTONE),
    ("Yellow Process", YELLOW_PROCESS),
    ("Yellow Ryb", YELLOW_RYB),
    ("Yellow Green", YELLOW_GREEN),
    ("Yellow Green Crayola", YELLOW_GREEN_CRAYOLA),
    ("Yellow Green Color Wheel", YELLOW_GREEN_COLOR_WHEEL),
    ("Yellow Orange", YELLOW_ORANGE),
    ("Yellow Orange Color Wheel", YELLOW_ORANGE_COLOR_WHEEL),
    ("Yellow Sunshine", YELLOW_SUNSHINE),
    ("Yinmn Blue", YINMN_BLUE),
    ("Zaffre", ZAFFRE),
    ("Zinnwaldite Brown", ZINNWALDITE_BROWN),
    ("Zomp", ZOMP),
];
