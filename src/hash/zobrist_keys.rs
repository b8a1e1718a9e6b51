//! Fixed 64-bit keys for position hashing.
//!
//! Emitted once by a splitmix64 run and kept byte-for-byte stable so that
//! hashes are reproducible across builds. Do not regenerate casually:
//! every persisted book line and every cross-version test fixture depends
//! on these exact values.

/// Placement keys occupy blocks 1..=12 (`(player * 6 + piece) << 6 | square`
/// with piece codes 1..=6); block 0 holds the per-flag-bit keys.
pub const KEYS: [u64; 1000] = [
    0x92ca64ba5b0c443f, 0xbe6939d71a86ad29, 0x64ae71dc2616e389, 0xaa99f5a25138494e,
    0xb9576a453d8a5d33, 0x4e56c3d347fb26a5, 0xac99614b12985db4, 0x0d4d838c5b0e0e69,
    0x0e806e9d3d4167db, 0xc608279edd4c1d19, 0x8bbe8b2b9c295a0f, 0x98c9c4e982fafe1a,
    0xdb1d1dab0caad317, 0xbad18f86663a18a7, 0x8e74e49741e72bc3, 0xd3539c381b8d52b3,
    0x79762a581b719dbe, 0xdcf062c020d003b3, 0xf12d1d61e7a6e641, 0xd854bcf817031c74,
    0x39f2ee011003536c, 0x81aa8f3965f4bcdb, 0xbc4e111dd3f9cc1e, 0x521fc652217d7c41,
    0x4771655dc2b156df, 0x1b93badc4ef88bd2, 0x364d4089881b9157, 0x7f010d41cd6a86c4,
    0x551830fda30a8159, 0x3606092511ef6404, 0xbcd7dc56f44ce52e, 0xf14ce6adf4271817,
    0xef1b256c9ec72f60, 0x7bd8e5eced603751, 0xa4a9f0e96ce82689, 0xe8d44ffd99acdac3,
    0x9b877c1ee1512fb6, 0x54648aeb77c4d806, 0x944c94421949586b, 0xa8be096dbcfcecfd,
    0x590159ff4508f3dc, 0x06db5f7c2fccfbc9, 0x45cc061583488619, 0xa2152559dea26e2c,
    0xb322a4af141d348a, 0xb0afc6f2bde71b25, 0xa03642a5e5ac77a1, 0xaa9f851d67860a86,
    0xe0467b99ef841d8a, 0x3283a0f9303acc4c, 0x9e1f070da8f9c2eb, 0xd3a89c948c381e0e,
    0xddfbacf40c8420ed, 0xa293ef90505e829b, 0xabb37cc09c2633ec, 0xd6dceac007dfd35c,
    0xf695bc074f2a5e86, 0x218f9794fdc7cd06, 0xeae256aa559765ff, 0xa27792298f9866fb,
    0xc44bc8fac0465f3c, 0xc9d2eedc232de920, 0x3636acdbc8b19631, 0xcc6729fde1c0474c,
    0xe9556768e9242a60, 0x57bb94eec2376ab3, 0xb7629dc54e88c107, 0xa9ca57dcb123a8f6,
    0x5c47928c1b589402, 0x9d65475f7d4ae760, 0x4b097c1cf2600905, 0xb8f2efd4b3c468e7,
    0x801b8c9e19a428e9, 0xb1d16a116ebc4180, 0xcbccdaa06770cf85, 0xd05513e067cb4dd3,
    0xd34fb1e3acfe16c1, 0x8f3968f726a8072a, 0x50f00235ababf919, 0xc581a624ca6a4dcb,
    0x12d3b9e441214696, 0xb7961e7efbc210e6, 0x1ca122f905c5046d, 0x2f85814f05ff21ae,
    0x33ff4bea888bfc4c, 0xa93d3013a48c78d9, 0x6ba95ee666605885, 0x4b389186572894f9,
    0x0a8932c6413aedef, 0x5ed04621658daac3, 0x4e1842f8ef11cf98, 0xf961348ef7eec970,
    0x79d0d777bb244222, 0x27338089f09c4370, 0x3a5d75d260d93783, 0x1bfb2fb991171a08,
    0xb98d1d8b17e6e4ea, 0xc376d95da364eaf0, 0xaa2cb81356a3fc0a, 0xfbcbafac2b0a8693,
    0x438a4136f5064671, 0x0f100b649746a7c0, 0xc2d586b8b66b3036, 0x1530aa9daf070c6f,
    0x221f2b8cc208598b, 0x653f89f624755e28, 0xd6d714acfb3c57f0, 0x63d32d516d56dc5b,
    0x67d6f3a555f8a333, 0x9b3aa83a677d36d9, 0x46182471d730c536, 0x1b3230ee6ac1e998,
    0xf05d556b0506251e, 0x51ca7df126425d1d, 0x37ee5a5b08a02ff3, 0x980feb2348b52ef8,
    0x8e292118bf55d69d, 0x90d47b5a68207e7f, 0xdd0ddf3e33fea6d7, 0x63a5a80a61c1e82b,
    0xda43d805c1cd8be7, 0xd513cbc198619553, 0xf5ba6179ea8a48ac, 0x136f6695bbe10e51,
    0xeea275bbffe64189, 0x94b917ecda9d8e11, 0xc5694404c50ea056, 0x7c17674bfa357ade,
    0x9434df1d5ea7ed55, 0x035589786d9966f8, 0xea9c10e2f72e6758, 0x92ba3ed0d2fa840c,
    0x0f0500f19d022aac, 0x175ceb2843f138d9, 0xbc6498c3e9417553, 0x15cd44b2e7f9d363,
    0xa416fd04ab542a56, 0x538ae95781dde179, 0xb434dbd289fb03f6, 0x7f5a7fc4bb668228,
    0x2650a0b8cb314a06, 0x87a20d9b90dcf8ea, 0x681a844c74222a63, 0xfc0e5423786878f7,
    0xd1cf3b79fb42f776, 0x222dcce964b56342, 0x3ee1c6ec5585cb6b, 0x4ec7c46e4f768895,
    0x5289c520507b51b6, 0xa231e2bc30d3c6c3, 0xeb7d73bec8e5b7b3, 0xe6faa731708cdddf,
    0x30b372624486b641, 0x3cf4a059fa59eb1b, 0xd9934f490c10a170, 0x5e67afab6d29a873,
    0xc228188e7a297c8c, 0x6103e1ca255d0a13, 0xd96ec3172e69928f, 0x11929f31ddcccd25,
    0xe1e4386638c4c5f1, 0x08163d1b33f6a366, 0x351467e010d10a70, 0x0631171f0d30e15f,
    0x55803364eb8878f7, 0x555b544a4d5b9436, 0xd4aed22876eb8f59, 0xd81717693a09a1f9,
    0xd7ef7a57965f6f96, 0x24adfc95eafd92d3, 0x3543da2d935bfb99, 0x559c3f40c30f2c0f,
    0x895e6880a8b25e75, 0x1cc9f4577d5ae607, 0x1e4f5d253e791b2d, 0x7e06fdf282081202,
    0x53136f789d08729e, 0x20f0cdaf08601119, 0xb8e2590516f4a688, 0x3117e56e7a741a5e,
    0x69e2c991ad33aa13, 0x9dff9980eb123e42, 0x95596dd4728dbc30, 0xa436206688e55611,
    0x5e351d4797630dec, 0xa37e5451719c8ebd, 0x2588c2311c870167, 0xf8a19346f5a92516,
    0x6b040781699997ec, 0xa71f453627b4b692, 0x4035706ace1570ac, 0x08ad184b196d48b0,
    0x8d3906d852dc33b8, 0x2b1da169eb46eea0, 0x96ee22e4196e4124, 0x5cfaa9097398e355,
    0xf6035b86beb73e59, 0x3bf2137156c1d7cb, 0xad22306e0d0664a8, 0x328de72c2663dd8d,
    0x39bae51c302dffb1, 0x099b2da751d9cf1f, 0xd8fbf46dfeecf81c, 0xca01ac815e538330,
    0x79e55a44cb4dcbbd, 0x75feefa58530b329, 0x622a8093b7fb5039, 0x1428bfd841294020,
    0x88ca9a07d5638f63, 0x1275f5d152351452, 0x5c0b46d0f6c0aab3, 0x8c1b697cd1aea9a1,
    0x7d68c9833440c3ed, 0x94ec760ba3543ca7, 0xa00e4bedfd5ada89, 0xdfdfde1a5ed0632b,
    0x412bd74fd599e684, 0xeed6f7df31b89fdb, 0x2b01c01d308aae0c, 0x8d0398b34dd7b9a3,
    0xda4ff2366862a3c7, 0x3f2eebf4c711aaf1, 0x4bc71520038e7a5e, 0x39bc36b8feb36a4f,
    0xfc9980e88ad50e27, 0x1268e3471113821c, 0x67c78e59f68a1557, 0xa047d650c96fc024,
    0x52f89b0b9c943cd9, 0xa1654da2879aa95c, 0xf64197e3377d0bfa, 0x5a88a1f24c2f086b,
    0x7ab118bd5afd53a7, 0xf068b705d0415c9b, 0xfcb6578316c26401, 0x9298f4f49606554a,
    0x022d7d297a50e2bc, 0x63c2b48064d42e26, 0x018757b979d88cc5, 0x0bac0ec13047cba5,
    0x60613ea7361ddc7c, 0xc9ae4f83ef0bc70b, 0xe7cdfb7b37ad1c5d, 0xfd57c358a65ea7ef,
    0xc01e030a0244f498, 0x94e2ec0f323795f3, 0x9c74d5416dd3909f, 0xf7f43ac4c36ae5be,
    0xa2974c793ea3dfab, 0xd5f6307eb1d0595c, 0xe895fb495ef69cad, 0x3301df967e7e3d31,
    0x40a3116a58bcab56, 0x425572f344949ae4, 0x06491bfc96863e59, 0xbccc3f31ec30c425,
    0x81305fd3d46d6d66, 0x846da24dd45dbc4e, 0x4596da87c7d025d1, 0xe8958146063e93c8,
    0xf882c26eedae56a1, 0x89ec1c7452210791, 0x6af84f1c89ab0dd5, 0xa28bb8b8223ba6b5,
    0xb845d2d3d9619c40, 0xc1b8aafb6229a1b9, 0xbf05552fb9adc206, 0x8bf6ce6e8bc36aa7,
    0xf9aca14491a936b3, 0x07c983d7c2e5c280, 0xa9e86e0f1947e353, 0x6f9e3ebcad8fe609,
    0x0dc59d4b95ec3e1c, 0xe956d414820a2c1d, 0x4e7ccdefae334552, 0x55ae411c95df8fd1,
    0xffe518a71a4bd14c, 0xb360b856d60a5224, 0xdc6d2a65af913330, 0x5870473858406e7c,
    0x5f9f53bc897e489c, 0xffc2c7506f64d527, 0xddd4ce0ca3d46f3b, 0x7cff88b119f7291d,
    0x6e0f8a527d922612, 0x37d6c5f83d95c4c0, 0xd9c5f575df3a1b56, 0x0e7f205498c2e661,
    0x74374116d498aa59, 0x263ae4a24d133e7b, 0xf20e43abcb90d38c, 0x2089df4145cdfd56,
    0x01b40f919dafa9b6, 0x82150aaa8bdfc0f7, 0xb641760b3c2badf0, 0x0c99724be4c10330,
    0xa6bac9ac2049a2f3, 0xe64722e5bc116fba, 0x0100daeb0f934182, 0xfad789f883da6fff,
    0x5e2472c87d47b5ef, 0xca56d3b128cf0d2e, 0xcd0cb9e904edf306, 0xe7cbd2e50a042ab7,
    0xf640aa98aa967090, 0x902cd67ab311605e, 0xcbe9b79298e2c67f, 0x62ac34769997988a,
    0xb2f7169d2c023f59, 0xba30f50fbac3c758, 0xf67895b9096295fe, 0xa273fde2d717c2d8,
    0x1d5ff8c98c093af5, 0x5b2f35a8596e3d54, 0x45a45c38211bdf9a, 0x7ca085c0d32a5c5e,
    0x150ae9f7ce272527, 0x7305866f3c61f2d5, 0xa45b56d151573168, 0x95981098c5b9b25b,
    0x8f7a294d68626353, 0x860304a4d3bb1f00, 0x12d6c49a29d97f7d, 0xfb3a28bdc850b469,
    0xec50775da45c7007, 0xe2788b408be7268a, 0x1ccb8faa595024b9, 0x9e88020f6f2704af,
    0x591741738de2e3fd, 0xf8f3ce338076ff6e, 0xf5c4d2c21541ea6f, 0x12f53946cb5ec262,
    0x5a5fb6185be2aeb3, 0x004f09fca8bef484, 0x29c318c1c62731d8, 0x77788756002dcdc4,
    0x38a3c9e77e27fd79, 0xfba633da1243a863, 0x10cf7359ac519cb8, 0x4a9d2ed8f85b3e43,
    0xe57718666f884ea9, 0x7167b520ad056bc9, 0xa528919aaaab4c8c, 0x99a55d14671c45d9,
    0x59ca11ba2bc95df0, 0x43ffc1802aeeaa0f, 0xe15b5b3d9e1d8d97, 0x219c39f9b5030d5a,
    0x15adc7756db1947d, 0x892a72c7496f1bd5, 0x099f8ba5ac86c7ee, 0x9a113126c214be54,
    0xfeb3e16ef72cde80, 0xa1c2ab80fa886bb1, 0x47483223ffae04f7, 0xa621f9ddfc011a04,
    0xfb286bd865644bc5, 0x8e002e363b8756e0, 0x87256732fb4e130a, 0x0f2a6ad7fa0510fc,
    0x14786790c0138730, 0x202dfee35cf7a0dd, 0x91fc4f902b0f6b6e, 0xe83b016988e802ef,
    0x8f13c8e0757321a7, 0x98b1e962c684eed7, 0x42afb2809a33560c, 0xd9ce77e579192851,
    0x4661951b9dfbe332, 0x051abb5d2a3800ec, 0x7057498ba1dacfbe, 0x292fe020be95cb92,
    0x90889c4466163d19, 0x015b7ace7913925d, 0x43d84ce340859d24, 0x4479db7f4271ffd4,
    0x73d77694ee9cccc7, 0x0b13ff4c3e99aa7e, 0xd4c7edf783a71b84, 0x38bbad76e5ca9f81,
    0x674001f9cb08b430, 0x6ea758e641f9570e, 0x5af850ae5709c95c, 0x812810ba7456536c,
    0xff461e7aadec799e, 0xfbe5a3c8f26ba653, 0x5742f931f45db8ce, 0x91a7c9d26dea36a3,
    0xc89c618dcdbd16fd, 0x4e2826971ec9b938, 0x8d20764157501236, 0xaa3b16c9bd067204,
    0xe467cc1316311ac3, 0x58e7d7037af170e6, 0x8adbca2e2cd59fd8, 0x8e304096fd7c3a07,
    0x304b9572168d6bdf, 0x27e653ac0c69a59d, 0x27f65da2163bec10, 0xc4bb862de91d1119,
    0xfcaead53fef90fa7, 0x1dbb81b7555ac9ec, 0x6f287440a6f22e49, 0x3f75dbbef2d22da0,
    0xdeb9260e774b38a8, 0x1c0f6d4b89cca764, 0x0ed6c02819bac1dd, 0x5de737b1b2a41644,
    0xb141d2ac3baccf67, 0xb2cb5fa36affa1a3, 0x7a33ba5008da8c6b, 0xcf173fda8a11e601,
    0x6fa240fb07417757, 0xd497a5d9bc57afe9, 0xb975ea1b3f6d8c24, 0xb48d549f4d6a5a17,
    0x42453b5261518d93, 0x52697bbdfbd89c4d, 0x5c4fa05784763a30, 0x4b077c73833110a8,
    0x9748346c1a4ff7ea, 0x03f9e7a59651ee29, 0x96f1b2255ac8a498, 0xb8f806877c504b19,
    0x3c09ecd56e63f88e, 0x949c5f8bd3dab42e, 0x6ed2d4ba3e13467f, 0xbbe7f2df9a604399,
    0x27b6c5bdc0ca4c89, 0x9a9447c7d7a322ad, 0x904f41afb5f6d867, 0xdc828fc59f39a74a,
    0xadacf1559883a3e7, 0xba2947fd5e4e6f28, 0x77130f20c28bd2b9, 0x66e445fea3deeb9d,
    0x337585651c10b646, 0x04f96aa246d1ec73, 0xa6c2b8e30ee32180, 0xef9656773eb85046,
    0x820d6f8ec819bb8d, 0x96b08229f3b06551, 0x2653e84efadbed1c, 0xe99bca7648a8d8fc,
    0x413cb78b0a90a1e9, 0x51fd8514bfe6d6e2, 0x7a1d5bdfc068c3c9, 0xb7a19affd2c5c901,
    0xefb59918772bc581, 0x404ae0c4c19e682a, 0xa752325de68c2211, 0xc22e638390fd6632,
    0xc8b9360c8b128289, 0x5773f7fec0348640, 0x8932f0892aaded7d, 0x9606a02571874632,
    0x199d76da83260898, 0x6f59194b0d8aa577, 0x8398686a9faf5930, 0xd4b84f5e59b7f238,
    0x4b9cefd88050782a, 0x9698b863b09d7fac, 0x7d908e2b704c522e, 0x6d2d440072b6f3cd,
    0xe62fa1274b17930d, 0x893bb60b136205a3, 0x3657a7cef2c1ff3c, 0xc2eeddb06a7f9520,
    0xe74b0abcac709c9f, 0xebcc3df2c234c1bf, 0x643f203bbb354ead, 0xa3d96c7ad93bf6b1,
    0x68b0fc25011e566b, 0x728a341f54ccad53, 0x841e5da9456c025e, 0xf0d559492bcba733,
    0xdb324b5d7492b204, 0xe03100a8b9e85d7f, 0x6f14982d3bb63464, 0x79bb28628968d347,
    0x3f2884c1b6b3c50c, 0x86e43205186a349e, 0x4c7c511c4cae5f1d, 0x98dd071c8b01f1bd,
    0x2545a91ecdece323, 0x3ada389ff6bae2d8, 0x11869c63980a41ed, 0xe5f697a690061bca,
    0xe7b5a9a1c972a829, 0xd90d978a984f4150, 0x2a7932cf89bb2deb, 0x44e463816080b70e,
    0x408d31119f610cf0, 0x445ae0c56eac78d1, 0x816ba2ec1ca43c23, 0xa07b624aafa49015,
    0x227f5b85afe55711, 0xaf513a3ea5693aa0, 0x5f505a535104d8bc, 0x3312bd9564727c28,
    0x50490c4df641a0ec, 0x8d4402b2f3d158f5, 0xee09b6f6791dd85a, 0x574b9d71df14afdc,
    0xf6c1e0b94ae899a6, 0x6edc9c2cac680a88, 0xb3b410e0be38e739, 0xb7baaadd0cfef455,
    0xdad6a427d022f6b1, 0x489153eb532ba8b8, 0x5696ae20d1ef4dac, 0xfe825143ce6e37c0,
    0x0a4dd431dd6f528e, 0x8034a3b31a525a1f, 0x87b91aa61c7066d6, 0x4bfd1ce361c97663,
    0x74ad416263f9400e, 0x0b3d59e23f8a4256, 0x6ae949b7c3129584, 0x8150d8a9c581dcf4,
    0x850b32a28f59e70e, 0x6daf6f21b44086a4, 0x8834231c60bc05e6, 0x3f402109f086a7a4,
    0xf0e6d22d929b1d89, 0x5892010c0b1ee4a5, 0x55301b8db57dabf3, 0xc125554823a719b2,
    0xcbdc4e07b6d6bc92, 0x5482520c7b8cff0b, 0x18aa617d1b694057, 0x68b9eb2ff23a5387,
    0xd1c05bb6bfbae48b, 0x6c30fc65348872b2, 0x514bb9e7d94fc3d9, 0x39e873cc82e21daa,
    0xb7f21556cdbd8c3f, 0x9ac5362acc190f48, 0x7157b03f3adfce66, 0x7acc5de8c380c1e5,
    0xfa07cd27307bc5df, 0x7c6a206e3901781b, 0xd6539d11742ed0a5, 0x1f261efaae255a9a,
    0xce031fd3a412c83b, 0xa4f84b4ef968b72e, 0x7f638d15c90af2d6, 0x98561990d54deff9,
    0x14398fe56a66b9d7, 0x763796262d24fa9a, 0x484d7a333230d6c0, 0x4a0392d820180edd,
    0xcf3d5f5ac63e2c0d, 0x1136af2a3ebdf22c, 0x5dba664bfe894c17, 0x3cd7ed51d81d0cc2,
    0x395a64bc5b04adec, 0xe906e68c388c97b8, 0x144aa32ba6d8c24d, 0xf714cd88d8590f24,
    0x612021e8bdac141a, 0x1c43c930036abe64, 0x6031032e00c711cf, 0x608f2074718a0587,
    0x83620918dcaba296, 0xe445c569804275d8, 0xa31d0edbb6a1380b, 0xe8c82e829a087650,
    0x55f91c58be3ae357, 0x40a3f3a768142e58, 0x275f3c3ad94c04e0, 0xea7e4b0216f3fefa,
    0x48fb65398be7a386, 0x28599bfe05c6c585, 0x720bd9d6f94ce9bd, 0xed1269c143b1c2b8,
    0x54c79f61324c27e9, 0xbce7fdfa2845cc77, 0x3030770cfc3c85fd, 0xf3fef09fc2ce1285,
    0x37a1ca92ad2330e2, 0xdfa0ae4f77b33b2d, 0xbc7142b896901a36, 0x7a77941f6c2e983e,
    0xfea5c4fce7d5ac00, 0x43796722a915e75c, 0xa08bab3e0d5ff2d8, 0x413706275b1b7683,
    0x2fd7bd1c9654ddc9, 0x45b215333d6c5c66, 0xaa638594d48c58e8, 0x2d22dbeffd572df6,
    0xf25ca3c58385db8d, 0xe44068fdb7622520, 0x24e393e48fe55b42, 0xad5489fe28df385e,
    0xac7286a6eec3d31b, 0xcc79c4b010d33a70, 0x34b49eb7dc9cc5e3, 0x239cbbd48cd42e40,
    0xdc57cbffa76b96fb, 0x07f958c694369eab, 0x5fb077215e04a18c, 0x3766aacfe4d07424,
    0xdc08df095443c05e, 0x0cca47f2679bcfef, 0xc3fe17ce01deb48e, 0x6068890feda2e265,
    0x4c7d61e54806729f, 0x391ddcb30069b9f7, 0xa1daf556ca1a72e3, 0x90a10976353006fc,
    0x91b5bb8d20e7e359, 0x998702d357881c37, 0xbceb255a1acacb9b, 0x2560660e7d946500,
    0x9c2714e12093216a, 0xb3580e79b85865f8, 0x92d620429d455ea0, 0xde8a887ede7c54b0,
    0xb31806328a8537e6, 0xee1bbbf514d1d12a, 0xc8664939a65c84b8, 0x632d806bcf5a7312,
    0x2120a35383dab37a, 0x51b3eeaa9521c2e6, 0xde3a6b91da01fe36, 0xd027bd4cd09f6cf3,
    0x2dddf769df33914f, 0x8012bb0165970ce2, 0x9b88adf9e2e68f57, 0x3c6841b833eccf4e,
    0xe01a85a3782f0725, 0x6f3e25bda4c48556, 0xd4d3217a78b501c0, 0x37122ebf34068d17,
    0xbaaf6f10f0fa83d4, 0xbd7d3f085190877a, 0x8bbbceb467a3b180, 0x873f34ccfc1d0b97,
    0xf7dec919cecbb017, 0x7d619d06985adcb3, 0x37557ee4bd3acda0, 0x5ae221f3daa3157b,
    0xf5116d96e22d511f, 0xa441763f9f6f1d57, 0xd79fa80e803562d9, 0xf2f96599628abf8f,
    0x0b5f04ec27fd96b2, 0xe066c9733c6c3e10, 0xa8bcc9c882d772e1, 0xde3612dcddc00aa6,
    0x5f2d7184f2533ef9, 0x053df6f8d83fc615, 0x9f3733494d0cd99a, 0x9150557873c204d2,
    0xd679c12415327c24, 0x0fb308c456a31e00, 0xba704084e504feba, 0xb3a6dc7d77bd2432,
    0x7cc8c678b3002a5d, 0x3a495cadf9f0836e, 0xbb37fcf4aaef93c7, 0x47c60b73da097258,
    0xd52f15ecd5478d53, 0x1ff3c75f5952a5f2, 0x612f30c80aa5addb, 0x0ca4f44b725a17ed,
    0xdc28ae04cc5a46ef, 0xf154af597635a06d, 0xea986b76063aa9b9, 0xd2030ad96d69e1f0,
    0x8ef5cbc382ac8e01, 0xd4fba9f9f9ea6726, 0xdb0c602b7f9c8241, 0x76e15e4256f3df05,
    0x7278afa085b01b12, 0x998669e5abbe4d9e, 0x9c065caa4de37bbd, 0x4bc363e4df715b52,
    0x3c6f5d63be66f2c1, 0xa8514d9e7addc9e3, 0xe0d08b0c800af41c, 0x20ecb91a666a9902,
    0x293ed681273dd84e, 0xb539944081cd814b, 0xf361f24ce6b9bfe5, 0x3fc50392b23e94e1,
    0x8961eeac154f52d2, 0xfea9e42fc033d8f6, 0xfbcab8845aa94960, 0xa9b74b9e74a1ca37,
    0x15df58a809d16f48, 0x8d635e64d26088dc, 0xd80630eda368c65d, 0xa575e0dbb8d127fe,
    0xb237fb61badc5f03, 0x18e7658f084977a0, 0x729188956aa7256f, 0xcad2167a0c9ae717,
    0x8315b4240c7ac715, 0x78b779abd549ede5, 0x84782ffe1d959d4c, 0x72bc774e1b5812cd,
    0x47280585629f429c, 0xbabdbf464ad2b5ce, 0x48caae3feaff1129, 0x61aede192eb39e4a,
    0xbdedabf79b0312dd, 0xabf2d1b412cb6b84, 0x7187fe2952841cd5, 0x8defe4ed6eb520c0,
    0xc653537170ff45a1, 0x5a9cf199094bac54, 0x1db7295f6d293f39, 0x64b653050735400e,
    0xd20c798f235988cc, 0xf53b02eb592b59d4, 0x4fbfd412c3d89b74, 0x888b43a7830496b0,
    0xb5ecaaff15ee82dd, 0x7035610eb6618bdf, 0xcf8343e4ff132940, 0x09ea62a47ac52a3e,
    0xbdfa863059becb30, 0xaad36ee06d97b5a1, 0xa26403ab12134a4f, 0xea168a3956b3e7d7,
    0xbcb9e1693dee2358, 0x825b67511bbd045b, 0x536bec720f0c2c9d, 0x5bbf162adb913b7b,
    0xe7dc11afb355d2bd, 0xd136c6a62bb61d8f, 0x82750dcf11ccadee, 0x640949413234880a,
    0x7c948b55f29929df, 0xe20cbf8cab147b1c, 0x69e4067a782ea675, 0x84332a2c2f7e936b,
    0x06f39bcda3395a8a, 0xe2e17403f16011c5, 0x82914eaa380b1087, 0x6086838fa969b0b6,
    0x54b94ee992f2436d, 0xb90cdc3093e43dcd, 0x3782502c0eecf1d3, 0x58308839995a4b91,
    0x551134b0a83efe3b, 0x41076b0d4c755574, 0xde94b6f144f10d8f, 0x6e40968991c839d9,
    0xd2737f77c6cf63be, 0x94b500404b80f110, 0x3a5bdc35e5748b13, 0xcda49e7911e18579,
    0xa602a51fba803a7e, 0x2eca335ed906277e, 0xd7069aef306344ce, 0xf377d128e0610fa0,
    0x10223f17d4ca2c64, 0xb35dc8b17170bf93, 0x9f240f689e937b0f, 0x394e0d97f21e47b6,
    0x514f6023c9f67f62, 0x69c132f97d3d561d, 0x7ffc9ec6243d4eb1, 0x79c7eb339180f5ee,
    0xe6c8bef4c559594e, 0x86ad396367d86b9a, 0x168886a817344d01, 0x149421a5dfe0130f,
    0x13631a9ef9902e75, 0x9fa64138f8066cfd, 0x81640b3e67ce79a5, 0xdde24ad05da42eab,
    0x82b83cac1c6795d0, 0x2e3f588d91dd624d, 0xb026672fa48093ac, 0xa87d08fa89759a72,
    0x86c599177f11f687, 0x73c7bb91de3faba1, 0x75adabea792ec308, 0xe3c7a2d0b48dee93,
    0xfa6bbfabd031c32d, 0x391c4855c27d6cf3, 0xf95dcf0230d0180a, 0x36f64f20a419e39d,
    0x103b962c514535c0, 0xceb5ca88743d7b2b, 0xa1e5d7e4292fb356, 0xf7b03aa578f5b969,
    0x152ae48fa0a695e3, 0xf510c2852af45ad3, 0xd501b05ad1f2601d, 0x5eeaff8b06fe3301,
    0x6507d36319d28a36, 0x190815a656988e12, 0x5434d7eb8d5b798e, 0x2ebaf423e6aa45ef,
    0x99987ac5c2815d8d, 0x854063650ccc6934, 0x77fa84b23b7da9d8, 0x34d658e1c4bec37e,
    0x122124eccd20466f, 0x1e9db5a88ed0422b, 0x853eed1410e2d550, 0xcfb7da5a8b9b9393,
    0xf1c1224b58b3177b, 0xac46ff227d5692af, 0x31f99fd72e26e6e6, 0x81d0d290a6c8c330,
    0x22c12285fc9443aa, 0x61180e80676c9ee0, 0x1edb760a69b94229, 0x28fccaa52e5fa8d2,
    0xe785bb327b5655f2, 0xc879f9390dcb7afb, 0xdbcfc7f2aedfb38d, 0xe3f45f6899c265c5,
    0x1407ee095723de88, 0x2a1372a73a405201, 0x889d3341b99893de, 0xfc1027f0a6b130fa,
    0xacf08ef2b0c1072e, 0x93aabb1d48319023, 0x1748021aa9199ade, 0x0e9736e9d3d8eeea,
    0xac6e253cff62321f, 0x2d08b9756299e74a, 0xfa0e7cb41486bca3, 0x6b5ed9646b88dd42,
    0x3f56e04a087ebe5f, 0x63b9c335ac427b7a, 0xb646c3ff1313e5f8, 0x8bb8e3b1c6c8546d,
    0x14558340e6087df1, 0x78f8edcc7c5fd01c, 0x0aaae6d46d0e46e2, 0x8086f23bada7a5d2,
    0xea9249a980666cc6, 0x9ddf6166c599f967, 0x7dd7bd257a17b50b, 0x38dfe08c43f8935b,
    0x1e47311fcaea9c41, 0x84d323aa89e99ab1, 0x9129fb6ade202d73, 0xeda606b8cf5fee25,
    0x62a27bc27404ffa7, 0x072e97dbbd4a3d2b, 0x5aebd8e95c7e3a1f, 0x521e6f8cd031d75e,
    0xfe65304008f34ef4, 0xa07ce384b186638a, 0x2300f153eafcdc7f, 0xfc0218bbacb11336,
    0xee509b568038f374, 0x2844c45d8085e522, 0x99476717e1396a6c, 0xa94d65e1688a494c,
    0xe4eba58df96f4b03, 0x6f2e753443b5978e, 0x909f3bc587e4f2f5, 0x1738fcdb809d223e,
    0x7c26c895018719af, 0x3dd03df1f4f64ebf, 0x8e674a6d29d110aa, 0x25fb3bae805fde09,
    0xc790cf75f8da31bd, 0x38d0bfe355dc2b00, 0xb75e82608b5bcec2, 0x8c34c36e2fd24c20,
    0x0e18789e8e3da212, 0xbbde7d659bcec10d, 0xaff85fe43dbecd2e, 0xcff8f854758a42e9,
    0x48c23ebac9396a7e, 0x802f37c371e95c5c, 0xcdc2ad3f7ce1afcf, 0x058bd8cbc1448bb6,
    0x6576e737c66cfa8e, 0x3ecb4a6eb4664131, 0xb32de4f28c777cdc, 0x398f7ed2683d319c,
    0x01c52138832d6eca, 0xf2eed318f81ae44b, 0x9013a8d4666013d0, 0x8ad5fd8c0c069cda,
    0x0692ce2eeb2e1877, 0xc1a428a30404817a, 0xecc83948c36db7f0, 0xc43e0fff287f1fae,
    0x2150959b5b0d5319, 0x6ea6d5aba07c965c, 0x4f370756cd773901, 0xade1b1c5350f8a96,
    0xcc7940c6388821cb, 0xf7809ea5a39ca177, 0xd42b652dc560400b, 0x3b7dc5111196f456,
    0x348c88fea96bc62c, 0x940e51d7463fbb65, 0x0883858f97e001a6, 0xf42e2dfa42506e6a,
    0x39e3ba29518fae70, 0x32dc64b2424e8581, 0x3e6ff1530f35952e, 0xb4da807fe0aae8b6,
    0x16237367ffc1c196, 0x00720646e7943d7b, 0x86e3d6efff9b250c, 0xba0107905fb6338a,
    0x6eaba3fa9e2a3ec7, 0x58ed9535ae54b6fb, 0xb8b15939edbcfb3d, 0x2d92cf782e279696,
    0x8e02cb62659b0024, 0x83d6ca8e75480ffe, 0x95fb84285d78d29f, 0x449f1b667e83d6ba,
    0x6e88169999721a00, 0x925dc8eb6abe30e5, 0x8e200b0f6104dc1f, 0x2d8d01aee1408a89,
    0xd0a72517f702fe75, 0x85c9ac7f1aa80b05, 0x240451e05775e004, 0xa8ef389376e89af2,
    0x274f4cad5e6ae4fc, 0x1b92d7de84874cf0, 0x707368bcd9900b0a, 0x3d48d5980836565f,
    0x490dda432d7ee152, 0x2b82909be1380369, 0xf20ee95256597f2f, 0x2775fb793f3ca3ca,
    0x68b28fd9ba50db64, 0x241c80b7fbfda39e, 0xa607bdf42a8b7c7f, 0xaeb96638633c16f2,
    0xbeeef51d9e5af981, 0x26b280adaa3784d2, 0x5f2d4b8f86148a33, 0xe19277bf8de18124,
    0xb1f4300fcdc46aa8, 0x407e14bac70f162d, 0xdd0983d63e32f595, 0x4a037016a380a27f,
    0xabca1cb6fb8f207b, 0x51295fe23c2da5af, 0x39656ad5ea1f1362, 0x3725e460ad27a2a2,
    0x81fec7794ce10bd8, 0x88da6ee409792993, 0xd21bb2b87ef631e3, 0xaabfe875545c1398,
    0xf6d7b7fee88a9832, 0x9409b4576f3f9251, 0x22617e449c39e15e, 0x1cccca9a266d9b91,
    0x1cad6ad7766cdf91, 0x17121df31387da19, 0xc56955c215ca8469, 0xff9991fc80d648ab,
    0x02f50e2903df2623, 0xee7e73b917b8167d, 0x68699333ee4a2515, 0x6f9225b3a8443085,
    0xe3febe1ddf8538cf, 0xe7de2ab084179e9c, 0x69c7742365eb3367, 0x3376621f3b4082bf,
    0x4c4023c54ac8fedb, 0x84c1f1d664cac5bd, 0x26fba453b9b9f519, 0xfed33b66f23b2329,
    0x5d1f52329c6c04e3, 0x751e051c7fafe98f, 0x1ee2b749a4803af4, 0x6b18a50a72422b77,
    0xf09aa9a0b28dabdc, 0xf00e1f71e5b78bd0, 0xe05b95d4c455713d, 0xd1b78e6b5e97434f,
    0x1e79eea9b1463b55, 0x9a4324bd2e59b016, 0xff4ea95f2e753b24, 0xb76ede79e4f8cc7d,
    0x9ca90f22ad7aecea, 0x785f90ce175ef1b4, 0xc2876e62057d4c1f, 0x5daa9f612bab72e6,
    0x5af694e2e461c8d1, 0x7e3e73b2f024d7da, 0x593b33b030cf812e, 0xf7ac6821e98f51b3,
    0x7feeb31aba8a10c4, 0xac8768b1410f1cc7, 0x166691d82cc78521, 0x87bf54a3086e50a3,
];
